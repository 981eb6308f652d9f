//! Document store backends.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::error::DbError;
use crate::filter::Filter;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// The primitives the adapter needs from a document database.
///
/// Implementations must be safe to share across concurrent requests; any
/// pooling or locking is their own concern.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document, returning its store-assigned `_id`.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, DbError>;

    /// Fetch a single document by its store-native `_id`.
    async fn find_by_id(&self, collection: &str, id: &Bson) -> Result<Option<Document>, DbError>;

    /// Fetch up to `limit` documents matching `filter`, in the store's
    /// natural order.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, DbError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
