/// Onboarding activity storage
use crate::{error::Result, oid};
use chatbot_core::types::Actividad;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

const COLLECTION: &str = "actividades";

/// Access component for the `actividades` collection.
#[derive(Clone)]
pub struct ActividadStore {
    collection: Collection<Actividad>,
}

impl ActividadStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// All activities, unfiltered.
    pub async fn get_all(&self) -> Result<Vec<Actividad>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Point lookup. A malformed id is not-found, not a fault.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Actividad>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed activity id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert a new activity, assigning its id and creation timestamp.
    pub async fn create(&self, mut actividad: Actividad) -> Result<Actividad> {
        actividad.id = Some(oid::generate());
        actividad.fecha_creacion = Utc::now();

        self.collection.insert_one(&actividad).await?;
        tracing::debug!(id = actividad.id.as_deref(), "activity created");
        Ok(actividad)
    }

    /// Full-document replace. The stored identifier is pinned to `id`
    /// regardless of what the replacement carries. Returns `true` only when
    /// the store reports a modified document.
    pub async fn update(&self, id: &str, mut actividad: Actividad) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed activity id");
            return Ok(false);
        };
        actividad.id = Some(id.clone());

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &actividad)
            .await?;
        Ok(result.modified_count > 0)
    }

    /// Physical delete. Returns `true` iff a document was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed activity id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Activities scheduled on a given onboarding day.
    pub async fn get_by_dia(&self, dia: i32) -> Result<Vec<Actividad>> {
        let cursor = self.collection.find(doc! { "dia": dia }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Activities of a given type.
    pub async fn get_by_tipo(&self, tipo: &str) -> Result<Vec<Actividad>> {
        let cursor = self.collection.find(doc! { "tipo": tipo }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Mandatory activities only.
    pub async fn get_obligatorias(&self) -> Result<Vec<Actividad>> {
        let cursor = self.collection.find(doc! { "obligatorio": true }).await?;
        Ok(cursor.try_collect().await?)
    }
}
