//! In-process [`DocumentStore`].
//!
//! Keeps documents per collection in insertion order and assigns
//! ObjectIds the way the server does. Selected with a `memory:` database
//! URL and used throughout the test suites.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::filter::Filter;
use crate::record::ID_FIELD;
use crate::store::DocumentStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DbError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        let id = match document.get(ID_FIELD) {
            Some(id) => {
                if documents.iter().any(|d| d.get(ID_FIELD) == Some(id)) {
                    return Err(DbError::Unavailable(format!(
                        "duplicate key in {collection}: _id {id}"
                    )));
                }
                id.clone()
            }
            None => Bson::ObjectId(ObjectId::new()),
        };

        // `_id` leads the document, as it does on the server.
        let mut stored = Document::new();
        stored.insert(ID_FIELD, id.clone());
        for (key, value) in document {
            if key != ID_FIELD {
                stored.insert(key, value);
            }
        }
        documents.push(stored);

        Ok(id)
    }

    async fn find_by_id(&self, collection: &str, id: &Bson) -> Result<Option<Document>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.get(ID_FIELD) == Some(id)))
            .cloned())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        // Server semantics: 0 means no limit, a negative limit is its magnitude.
        let take = match limit.unsigned_abs() {
            0 => usize::MAX,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(d))
                    .take(take)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
