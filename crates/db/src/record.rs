//! Stored records and their public shape.
//!
//! Internally a document carries the store-native `_id`; everything that
//! leaves this crate carries a string `id` instead.

use chrono::Utc;
use emberlance_core::types::{RecordId, Timestamp};
use mongodb::bson::{self, Bson, Document};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::DbError;

pub const ID_FIELD: &str = "_id";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";

/// One persisted document with its identifier and timestamps split out.
///
/// Timestamps are `None` only for documents written outside this service.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    /// Every remaining stored field.
    pub fields: Document,
}

impl Record {
    /// Normalize a stored document: `_id` becomes the string `id`, and the
    /// two timestamps are lifted out of the field map.
    pub fn from_document(collection: &'static str, mut document: Document) -> Result<Self, DbError> {
        let id = document
            .remove(ID_FIELD)
            .map(|raw| id_to_string(&raw))
            .ok_or_else(|| DbError::Inconsistent {
                collection,
                reason: "stored document has no _id".to_string(),
            })?;

        let created_at = document.remove(CREATED_AT).and_then(timestamp_from_bson);
        let updated_at = document.remove(UPDATED_AT).and_then(timestamp_from_bson);

        Ok(Self {
            id,
            created_at,
            updated_at,
            fields: document,
        })
    }
}

/// Render a store-native identifier as an opaque string.
pub fn id_to_string(raw: &Bson) -> String {
    match raw {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.clone().into_relaxed_extjson().to_string(),
    }
}

/// Append `created_at` and `updated_at`, both set to `now`.
///
/// Stored at millisecond precision, which is what the store keeps.
pub fn stamp_timestamps(mut fields: Document, now: Timestamp) -> Document {
    let at = bson::DateTime::from_millis(now.timestamp_millis());
    fields.insert(CREATED_AT, at);
    fields.insert(UPDATED_AT, at);
    fields
}

fn timestamp_from_bson(value: Bson) -> Option<Timestamp> {
    match value {
        Bson::DateTime(dt) => chrono::DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()),
        Bson::String(s) => chrono::DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 3))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, &value.clone().into_relaxed_extjson())?;
        }
        map.serialize_entry(CREATED_AT, &self.created_at)?;
        map.serialize_entry(UPDATED_AT, &self.updated_at)?;
        map.end()
    }
}
