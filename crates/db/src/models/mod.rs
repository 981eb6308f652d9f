//! Persisted shapes of the content contracts.
//!
//! Each entity kind maps to and from a stored document through two
//! explicit functions: [`StoredContent::to_fields`] enumerates every field
//! that gets written, and [`StoredContent::from_document`] enumerates every
//! field that gets read back, with its default.

pub mod contact_message;
pub mod track;
pub mod video;

use emberlance_core::content::{ContentContract, PUBLISHED_DEFAULT};
use mongodb::bson::{Bson, Document};

/// Field holding the publication flag on tracks and videos.
pub const PUBLISHED_FIELD: &str = "published";

/// A stored document could not be shaped into its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    #[error("stored document is missing required field `{0}`")]
    MissingField(&'static str),
}

/// A content contract with an explicit persisted shape.
pub trait StoredContent: ContentContract + Sized {
    /// The exact fields written for this entity, without timestamps.
    /// Unset optionals are omitted.
    fn to_fields(&self) -> Document;

    /// Shape a stored field map into the contract. Unknown fields are
    /// dropped and missing optionals take their defaults.
    fn from_document(document: &Document) -> Result<Self, CoercionError>;
}

/// Content that carries a `published` flag and can be listed by it.
pub trait Publishable: StoredContent {}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

pub(crate) fn required_string(
    document: &Document,
    field: &'static str,
) -> Result<String, CoercionError> {
    optional_string(document, field).ok_or(CoercionError::MissingField(field))
}

/// A string field; null, missing, or non-string values read as unset.
pub(crate) fn optional_string(document: &Document, field: &str) -> Option<String> {
    match document.get(field) {
        Some(Bson::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// A list of strings; non-string elements are dropped.
pub(crate) fn optional_string_list(document: &Document, field: &str) -> Option<Vec<String>> {
    match document.get(field) {
        Some(Bson::Array(items)) => Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    }
}

/// The `published` flag. Anything but an explicit boolean reads as the
/// default, so records that predate the field stay visible.
pub(crate) fn published_flag(document: &Document) -> bool {
    match document.get(PUBLISHED_FIELD) {
        Some(Bson::Boolean(published)) => *published,
        _ => PUBLISHED_DEFAULT,
    }
}

pub(crate) fn insert_optional(document: &mut Document, field: &str, value: Option<&String>) {
    if let Some(value) = value {
        document.insert(field, value.as_str());
    }
}

pub(crate) fn insert_optional_list(
    document: &mut Document,
    field: &str,
    values: Option<&Vec<String>>,
) {
    if let Some(values) = values {
        let items: Vec<Bson> = values.iter().map(|v| Bson::String(v.clone())).collect();
        document.insert(field, items);
    }
}
