/// User storage
use crate::{error::Result, oid};
use chatbot_core::types::Usuario;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};

const COLLECTION: &str = "usuarios";

/// Access component for the `usuarios` collection.
#[derive(Clone)]
pub struct UsuarioStore {
    collection: Collection<Usuario>,
}

impl UsuarioStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Usuario>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Usuario>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed user id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut usuario: Usuario) -> Result<Usuario> {
        let now = Utc::now();
        usuario.id = Some(oid::generate());
        usuario.fecha_creacion = now;
        usuario.fecha_actualizacion = now;

        self.collection.insert_one(&usuario).await?;
        tracing::debug!(id = usuario.id.as_deref(), email = %usuario.email, "user created");
        Ok(usuario)
    }

    pub async fn update(&self, id: &str, mut usuario: Usuario) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed user id");
            return Ok(false);
        };
        usuario.id = Some(id.clone());
        usuario.fecha_actualizacion = Utc::now();

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &usuario)
            .await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed user id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// First user registered under `email`, if any.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Usuario>> {
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    /// First user registered under `dni`, if any.
    pub async fn get_by_dni(&self, dni: &str) -> Result<Option<Usuario>> {
        Ok(self.collection.find_one(doc! { "dni": dni }).await?)
    }

    pub async fn get_by_estado_onboarding(&self, estado: &str) -> Result<Vec<Usuario>> {
        let cursor = self
            .collection
            .find(doc! { "estadoOnboarding": estado })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_activos(&self) -> Result<Vec<Usuario>> {
        let cursor = self.collection.find(doc! { "activo": true }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_departamento(&self, departamento: &str) -> Result<Vec<Usuario>> {
        let cursor = self
            .collection
            .find(doc! { "departamento": departamento })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
