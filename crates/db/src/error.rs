/// Errors raised by the document store adapter.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The store could not be reached, or rejected the operation.
    #[error("Document store unavailable: {0}")]
    Unavailable(String),

    /// A document that must exist could not be read back.
    #[error("Document {id} not found in collection {collection}")]
    NotFound { collection: &'static str, id: String },

    /// A stored document is missing its store-assigned identifier.
    #[error("Inconsistent document in collection {collection}: {reason}")]
    Inconsistent {
        collection: &'static str,
        reason: String,
    },
}

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        DbError::Unavailable(err.to_string())
    }
}
