//! Equality filters for list queries.

use std::collections::BTreeMap;

use mongodb::bson::{doc, Bson, Document};

/// How a single field must match.
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    /// The stored value equals the given value.
    Equals(Bson),
    /// The stored value is anything but the given value, including null,
    /// absent, or a value of another type.
    NotEquals(Bson),
}

/// A conjunction of per-field matches. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: BTreeMap<String, Match>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.fields
            .insert(field.to_string(), Match::Equals(value.into()));
        self
    }

    pub fn not_equals(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.fields
            .insert(field.to_string(), Match::NotEquals(value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as a MongoDB query document.
    ///
    /// `NotEquals(v)` becomes `{ "$ne": v }`, which also matches documents
    /// where the field is missing.
    pub fn to_document(&self) -> Document {
        let mut query = Document::new();
        for (field, m) in &self.fields {
            match m {
                Match::Equals(value) => {
                    query.insert(field.clone(), value.clone());
                }
                Match::NotEquals(value) => {
                    query.insert(field.clone(), doc! { "$ne": value.clone() });
                }
            }
        }
        query
    }

    /// Evaluate the filter against a document in memory.
    pub fn matches(&self, document: &Document) -> bool {
        self.fields.iter().all(|(field, m)| match m {
            Match::Equals(value) => document.get(field) == Some(value),
            Match::NotEquals(value) => document.get(field) != Some(value),
        })
    }
}
