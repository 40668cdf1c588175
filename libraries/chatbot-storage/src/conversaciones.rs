/// Chatbot conversation storage
use crate::{error::Result, oid};
use chatbot_core::types::{Conversacion, Mensaje};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    Collection, Database,
};

const COLLECTION: &str = "conversaciones";

/// Access component for the `conversaciones` collection.
#[derive(Clone)]
pub struct ConversacionStore {
    collection: Collection<Conversacion>,
}

impl ConversacionStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Conversacion>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Conversacion>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed conversation id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut conversacion: Conversacion) -> Result<Conversacion> {
        let now = Utc::now();
        conversacion.id = Some(oid::generate());
        conversacion.fecha_inicio = now;
        conversacion.fecha_ultima_mensaje = now;

        self.collection.insert_one(&conversacion).await?;
        tracing::debug!(
            id = conversacion.id.as_deref(),
            usuario = %conversacion.usuario_id,
            "conversation created"
        );
        Ok(conversacion)
    }

    pub async fn update(&self, id: &str, mut conversacion: Conversacion) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed conversation id");
            return Ok(false);
        };
        conversacion.id = Some(id.clone());
        conversacion.fecha_ultima_mensaje = Utc::now();

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &conversacion)
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed conversation id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn get_by_usuario(&self, usuario_id: &str) -> Result<Vec<Conversacion>> {
        let cursor = self
            .collection
            .find(doc! { "usuarioId": usuario_id })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_activas(&self) -> Result<Vec<Conversacion>> {
        let cursor = self.collection.find(doc! { "activa": true }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_resueltas(&self) -> Result<Vec<Conversacion>> {
        let cursor = self.collection.find(doc! { "resuelto": true }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Append one message and refresh `fechaUltimaMensaje` in a single
    /// store-side update, so concurrent appends never lose messages.
    ///
    /// The message timestamp is stamped here; both fields carry the same
    /// instant.
    pub async fn add_mensaje(&self, id: &str, mut mensaje: Mensaje) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed conversation id");
            return Ok(false);
        };

        let now = Utc::now();
        mensaje.timestamp = now;
        let update = doc! {
            "$push": { "mensajes": to_bson(&mensaje)? },
            "$set": { "fechaUltimaMensaje": to_bson(&now)? },
        };

        let result = self
            .collection
            .update_one(doc! { "_id": id.as_str() }, update)
            .await?;
        tracing::debug!(%id, appended = result.modified_count > 0, "message append");
        Ok(result.modified_count > 0)
    }
}
