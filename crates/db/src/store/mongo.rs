//! MongoDB-backed [`DocumentStore`].

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection, Database};
use tokio::sync::OnceCell;

use crate::error::DbError;
use crate::filter::Filter;
use crate::store::DocumentStore;

/// A MongoDB database reached through one lazily created client.
///
/// The client is built on first use and then shared for the life of the
/// process; the driver pools connections internally. If building the
/// client fails the cell stays empty and the next call tries again.
pub struct MongoStore {
    url: String,
    database_name: String,
    database: OnceCell<Database>,
}

impl MongoStore {
    pub fn new(url: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database_name: database_name.into(),
            database: OnceCell::new(),
        }
    }

    async fn database(&self) -> Result<&Database, DbError> {
        self.database
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.url).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to create document store client");
                    DbError::from(e)
                })?;
                tracing::info!(database = %self.database_name, "Document store client created");
                Ok::<_, DbError>(client.database(&self.database_name))
            })
            .await
    }

    async fn collection(&self, name: &str) -> Result<Collection<Document>, DbError> {
        Ok(self.database().await?.collection::<Document>(name))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DbError> {
        let result = self.collection(collection).await?.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn find_by_id(&self, collection: &str, id: &Bson) -> Result<Option<Document>, DbError> {
        let found = self
            .collection(collection)
            .await?
            .find_one(doc! { "_id": id.clone() })
            .await?;
        Ok(found)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError> {
        let cursor = self
            .collection(collection)
            .await?
            .find(filter.to_document())
            .limit(limit)
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn ping(&self) -> Result<(), DbError> {
        self.database().await?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
