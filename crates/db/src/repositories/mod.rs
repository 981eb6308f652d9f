//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn DocumentStore` as the first argument.

pub mod content_repo;
pub mod document_repo;

pub use content_repo::ContentRepo;
pub use document_repo::DocumentRepo;

/// Default cap on list results when the caller gives none.
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound on any single list query.
pub const MAX_LIMIT: i64 = 1000;

/// Resolve a caller-supplied limit into `1..=MAX_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
