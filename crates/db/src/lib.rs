//! Document store adapter.
//!
//! A [`DocumentStore`] is the opaque document database; [`DocumentRepo`]
//! layers timestamping and id normalization on top of it, and
//! [`ContentRepo`] shapes records into the content contracts.
//!
//! [`DocumentRepo`]: repositories::DocumentRepo
//! [`ContentRepo`]: repositories::ContentRepo

use std::sync::Arc;

pub mod error;
pub mod filter;
pub mod models;
pub mod record;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use store::{DocumentStore, MemoryStore, MongoStore};

/// Shared handle to the process-wide document store.
pub type DbHandle = Arc<dyn DocumentStore>;

/// URL prefix that selects the in-process [`MemoryStore`].
pub const MEMORY_URL_PREFIX: &str = "memory:";

/// Build the store handle for a database URL.
///
/// No connection is made here: [`MongoStore`] connects on first use.
pub fn create_store(database_url: &str, database_name: &str) -> DbHandle {
    if database_url.starts_with(MEMORY_URL_PREFIX) {
        tracing::warn!("Using in-memory document store; data will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(MongoStore::new(database_url, database_name))
    }
}

/// Round-trip to the store to verify it is reachable.
pub async fn health_check(store: &dyn DocumentStore) -> Result<(), DbError> {
    store.ping().await
}
