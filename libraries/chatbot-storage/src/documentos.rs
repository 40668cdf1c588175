/// Onboarding document storage
use crate::{error::Result, oid};
use chatbot_core::types::Documento;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

const COLLECTION: &str = "documentos";

/// Access component for the `documentos` collection.
#[derive(Clone)]
pub struct DocumentoStore {
    collection: Collection<Documento>,
}

impl DocumentoStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Documento>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Documento>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed document id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut documento: Documento) -> Result<Documento> {
        let now = Utc::now();
        documento.id = Some(oid::generate());
        documento.fecha_publicacion = now;
        documento.fecha_actualizacion = now;

        self.collection.insert_one(&documento).await?;
        tracing::debug!(id = documento.id.as_deref(), "document created");
        Ok(documento)
    }

    pub async fn update(&self, id: &str, mut documento: Documento) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed document id");
            return Ok(false);
        };
        documento.id = Some(id.clone());
        documento.fecha_actualizacion = Utc::now();

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &documento)
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed document id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    pub async fn get_by_categoria(&self, categoria: &str) -> Result<Vec<Documento>> {
        let cursor = self.collection.find(doc! { "categoria": categoria }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_tipo(&self, tipo: &str) -> Result<Vec<Documento>> {
        let cursor = self.collection.find(doc! { "tipo": tipo }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Documents carrying `tag` in their tag list.
    pub async fn get_by_tag(&self, tag: &str) -> Result<Vec<Documento>> {
        let cursor = self.collection.find(doc! { "tags": tag }).await?;
        Ok(cursor.try_collect().await?)
    }
}
