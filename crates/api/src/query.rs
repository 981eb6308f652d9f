//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for public content listings.
pub const DEFAULT_CONTENT_LIMIT: i64 = 50;

fn default_published_only() -> bool {
    true
}

fn default_limit() -> i64 {
    DEFAULT_CONTENT_LIMIT
}

/// Query parameters for `/tracks` and `/videos` (`?published_only=&limit=`).
///
/// Listings are restricted to published content unless the caller opts
/// out explicitly.
#[derive(Debug, Deserialize)]
pub struct ContentListParams {
    #[serde(default = "default_published_only", alias = "publishedOnly")]
    pub published_only: bool,
    #[serde(default = "default_limit")]
    pub limit: i64,
}
