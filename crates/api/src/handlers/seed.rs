//! Handler for the `/seed` administrative endpoint.
//!
//! Seeding is best-effort: every item is parsed, validated and stored on its
//! own, so one bad item never prevents (or undoes) the others.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use emberlance_core::collection::Collection;
use emberlance_core::content::{Track, Video};
use emberlance_core::error::CoreError;
use emberlance_db::models::StoredContent;
use emberlance_db::repositories::ContentRepo;
use emberlance_db::DocumentStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Items are kept as raw JSON so each one is checked independently.
#[derive(Debug, Default, Deserialize)]
pub struct SeedContent {
    #[serde(default)]
    pub tracks: Option<Vec<Value>>,
    #[serde(default)]
    pub videos: Option<Vec<Value>>,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SeedCounts {
    pub tracks: usize,
    pub videos: usize,
}

/// One item that could not be seeded.
#[derive(Debug, Serialize)]
pub struct SeedFailure {
    pub kind: Collection,
    /// Position of the item in its input list.
    pub index: usize,
    pub error: String,
    /// Offending fields, when the item failed validation.
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    /// True when every item was created.
    pub success: bool,
    pub created: SeedCounts,
    pub failures: Vec<SeedFailure>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /seed
///
/// Bulk-insert initial tracks and videos, reporting per-item failures.
pub async fn seed(
    State(state): State<AppState>,
    payload: Result<Json<SeedContent>, JsonRejection>,
) -> AppResult<Json<SeedResponse>> {
    let Json(input) = payload?;
    let store = state.store.as_ref();
    let mut failures = Vec::new();

    let created = SeedCounts {
        tracks: seed_items::<Track>(store, input.tracks.unwrap_or_default(), &mut failures).await,
        videos: seed_items::<Video>(store, input.videos.unwrap_or_default(), &mut failures).await,
    };

    tracing::info!(
        tracks = created.tracks,
        videos = created.videos,
        failed = failures.len(),
        "Seed completed"
    );

    Ok(Json(SeedResponse {
        success: failures.is_empty(),
        created,
        failures,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create each item in order, returning how many were stored.
async fn seed_items<T>(
    store: &dyn DocumentStore,
    items: Vec<Value>,
    failures: &mut Vec<SeedFailure>,
) -> usize
where
    T: StoredContent + DeserializeOwned,
{
    let mut created = 0;

    for (index, raw) in items.into_iter().enumerate() {
        let failure = |error: String, fields: Vec<String>| SeedFailure {
            kind: T::COLLECTION,
            index,
            error,
            fields,
        };

        let item: T = match serde_json::from_value(raw) {
            Ok(item) => item,
            Err(e) => {
                failures.push(failure(format!("Invalid {}: {e}", T::COLLECTION.entity()), vec![]));
                continue;
            }
        };

        if let Err(err) = item.check() {
            let fields = match &err {
                CoreError::Validation { fields, .. } => fields.clone(),
                _ => vec![],
            };
            failures.push(failure(err.to_string(), fields));
            continue;
        }

        match ContentRepo::create(store, &item).await {
            Ok(record) => {
                tracing::debug!(collection = T::COLLECTION.name(), id = %record.id, "Seeded item");
                created += 1;
            }
            Err(e) => {
                tracing::error!(collection = T::COLLECTION.name(), index, error = %e, "Failed to seed item");
                failures.push(failure(e.to_string(), vec![]));
            }
        }
    }

    created
}
