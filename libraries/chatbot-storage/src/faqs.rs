/// FAQ storage and search
use crate::{error::Result, oid};
use chatbot_core::types::Faq;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Collection, Database,
};

const COLLECTION: &str = "faqs";

/// Access component for the `faqs` collection.
#[derive(Clone)]
pub struct FaqStore {
    collection: Collection<Faq>,
}

impl FaqStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Faq>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Faq>> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed faq id");
            return Ok(None);
        };
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn create(&self, mut faq: Faq) -> Result<Faq> {
        let now = Utc::now();
        faq.id = Some(oid::generate());
        faq.fecha_creacion = now;
        faq.fecha_actualizacion = now;

        self.collection.insert_one(&faq).await?;
        tracing::debug!(id = faq.id.as_deref(), "faq created");
        Ok(faq)
    }

    pub async fn update(&self, id: &str, mut faq: Faq) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed faq id");
            return Ok(false);
        };
        faq.id = Some(id.clone());
        faq.fecha_actualizacion = Utc::now();

        let result = self.collection.replace_one(doc! { "_id": id }, &faq).await?;
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = oid::normalize(id) else {
            tracing::warn!(id, "malformed faq id");
            return Ok(false);
        };

        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Free-text search: case-insensitive substring match on the question or
    /// the answer, or an exact hit in the keyword list. A blank query is the
    /// full list.
    ///
    /// The three branches are a single `$or`, so a FAQ matching more than
    /// one of them comes back once.
    pub async fn search(&self, query: &str) -> Result<Vec<Faq>> {
        if query.trim().is_empty() {
            return self.get_all().await;
        }

        let cursor = self.collection.find(search_filter(query)).await?;
        let results: Vec<Faq> = cursor.try_collect().await?;
        tracing::debug!(query, hits = results.len(), "faq search");
        Ok(results)
    }
}

fn search_filter(query: &str) -> Document {
    doc! {
        "$or": [
            { "pregunta": { "$regex": query, "$options": "i" } },
            { "respuesta": { "$regex": query, "$options": "i" } },
            { "palabrasClave": query },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn search_filter_unions_three_branches() {
        let filter = search_filter("horario");
        let Some(Bson::Array(branches)) = filter.get("$or") else {
            panic!("expected $or filter");
        };
        assert_eq!(branches.len(), 3);

        let pregunta = branches[0].as_document().unwrap();
        let regex = pregunta.get_document("pregunta").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "horario");
        assert_eq!(regex.get_str("$options").unwrap(), "i");

        // Keyword branch is an exact membership match, not a regex.
        let keywords = branches[2].as_document().unwrap();
        assert_eq!(keywords.get_str("palabrasClave").unwrap(), "horario");
    }
}
