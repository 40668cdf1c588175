/// Automated message storage
use crate::{error::Result, oid};
use chatbot_core::types::MensajeAutomatico;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

const COLLECTION: &str = "mensajesAutomaticos";

/// Access component for the `mensajesAutomaticos` collection.
#[derive(Clone)]
pub struct MensajeAutomaticoStore {
    collection: Collection<MensajeAutomatico>,
}

impl MensajeAutomaticoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<MensajeAutomatico>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<MensajeAutomatico>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed automated message id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut mensaje: MensajeAutomatico) -> Result<MensajeAutomatico> {
        mensaje.id = Some(oid::generate());
        mensaje.fecha_creacion = Utc::now();

        self.collection.insert_one(&mensaje).await?;
        tracing::debug!(id = mensaje.id.as_deref(), "automated message created");
        Ok(mensaje)
    }

    pub async fn update(&self, id: &str, mut mensaje: MensajeAutomatico) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed automated message id");
            return Ok(false);
        };
        mensaje.id = Some(id.clone());

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &mensaje)
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed automated message id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn get_by_tipo(&self, tipo: &str) -> Result<Vec<MensajeAutomatico>> {
        let cursor = self.collection.find(doc! { "tipo": tipo }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_activos(&self) -> Result<Vec<MensajeAutomatico>> {
        let cursor = self.collection.find(doc! { "activo": true }).await?;
        Ok(cursor.try_collect().await?)
    }
}
