/// System configuration storage
use crate::{error::Result, oid};
use chatbot_core::types::Configuracion;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

const COLLECTION: &str = "configuracion";

/// Access component for the `configuracion` collection.
#[derive(Clone)]
pub struct ConfiguracionStore {
    collection: Collection<Configuracion>,
}

impl ConfiguracionStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Configuracion>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Configuracion>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed configuration id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut configuracion: Configuracion) -> Result<Configuracion> {
        let now = Utc::now();
        configuracion.id = Some(oid::generate());
        configuracion.fecha_creacion = now;
        configuracion.fecha_actualizacion = now;

        self.collection.insert_one(&configuracion).await?;
        tracing::debug!(id = configuracion.id.as_deref(), "configuration created");
        Ok(configuracion)
    }

    pub async fn update(&self, id: &str, mut configuracion: Configuracion) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed configuration id");
            return Ok(false);
        };
        configuracion.id = Some(id.clone());
        configuracion.fecha_actualizacion = Utc::now();

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &configuracion)
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed configuration id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn get_by_tipo(&self, tipo: &str) -> Result<Vec<Configuracion>> {
        let cursor = self.collection.find(doc! { "tipo": tipo }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_activas(&self) -> Result<Vec<Configuracion>> {
        let cursor = self.collection.find(doc! { "activo": true }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Configuration entries are commonly addressed by name; names are
    /// expected (but not enforced) to be unique, so this returns the first
    /// match.
    pub async fn get_by_nombre(&self, nombre: &str) -> Result<Option<Configuracion>> {
        Ok(self.collection.find_one(doc! { "nombre": nombre }).await?)
    }
}
