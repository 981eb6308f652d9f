//! Typed create/list for the content contracts.

use emberlance_core::content::PUBLISHED_DEFAULT;

use crate::error::DbError;
use crate::filter::Filter;
use crate::models::{Publishable, StoredContent, PUBLISHED_FIELD};
use crate::record::Record;
use crate::repositories::DocumentRepo;
use crate::store::DocumentStore;

/// Persists and lists contract-shaped content.
///
/// Inputs are expected to have passed contract validation already.
pub struct ContentRepo;

impl ContentRepo {
    /// Persist a contract value into its collection.
    pub async fn create<T: StoredContent>(
        store: &dyn DocumentStore,
        item: &T,
    ) -> Result<Record, DbError> {
        DocumentRepo::create(store, T::COLLECTION, item.to_fields()).await
    }

    /// List content, shaped back into the contract.
    ///
    /// With `published_only`, only records explicitly marked unpublished are
    /// excluded; an unset or non-boolean flag reads as published. Records that cannot be
    /// shaped (missing a required field) are skipped.
    pub async fn list<T: Publishable>(
        store: &dyn DocumentStore,
        published_only: bool,
        limit: Option<i64>,
    ) -> Result<Vec<T>, DbError> {
        let filter = if published_only {
            Filter::new().not_equals(PUBLISHED_FIELD, !PUBLISHED_DEFAULT)
        } else {
            Filter::new()
        };

        let records = DocumentRepo::list(store, T::COLLECTION, &filter, limit).await?;
        let items = records
            .iter()
            .filter_map(|record| match T::from_document(&record.fields) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(
                        collection = T::COLLECTION.name(),
                        id = %record.id,
                        error = %e,
                        "Skipping stored record that does not fit its contract"
                    );
                    None
                }
            })
            .collect();
        Ok(items)
    }
}
