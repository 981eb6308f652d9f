//! Generic create/list over any collection.

use chrono::Utc;
use emberlance_core::collection::Collection;
use mongodb::bson::Document;

use crate::error::DbError;
use crate::filter::Filter;
use crate::record::{id_to_string, stamp_timestamps, Record};
use crate::repositories::clamp_limit;
use crate::store::DocumentStore;

/// Timestamping and id normalization on top of a [`DocumentStore`].
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert `fields` into `collection`, stamped with `created_at` and
    /// `updated_at`, and return the record as the store persisted it.
    ///
    /// Not idempotent: every call creates a new record.
    pub async fn create(
        store: &dyn DocumentStore,
        collection: Collection,
        fields: Document,
    ) -> Result<Record, DbError> {
        let name = collection.name();
        let document = stamp_timestamps(fields, Utc::now());

        let id = store.insert_one(name, document).await?;

        let stored = store.find_by_id(name, &id).await?.ok_or_else(|| {
            let id = id_to_string(&id);
            tracing::error!(collection = name, %id, "Inserted document could not be read back");
            DbError::NotFound {
                collection: name,
                id,
            }
        })?;

        let record = Record::from_document(name, stored)?;
        tracing::debug!(collection = name, id = %record.id, "Document created");
        Ok(record)
    }

    /// List up to `limit` records of `collection` matching `filter`.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`](super::DEFAULT_LIMIT). Order is
    /// whatever the store returns and must not be relied upon.
    pub async fn list(
        store: &dyn DocumentStore,
        collection: Collection,
        filter: &Filter,
        limit: Option<i64>,
    ) -> Result<Vec<Record>, DbError> {
        let name = collection.name();
        let documents = store.find(name, filter, clamp_limit(limit)).await?;

        let records = documents
            .into_iter()
            .map(|document| Record::from_document(name, document))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(collection = name, count = records.len(), "Documents listed");
        Ok(records)
    }
}
