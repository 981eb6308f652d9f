//! Handlers for the `/tracks` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use emberlance_core::content::Track;
use emberlance_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::query::ContentListParams;
use crate::state::AppState;

/// GET /tracks?published_only=true&limit=50
///
/// List tracks, published only unless the caller opts out.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ContentListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Track>>> {
    let Query(params) = params?;
    let tracks =
        ContentRepo::list::<Track>(state.store.as_ref(), params.published_only, Some(params.limit))
            .await?;
    Ok(Json(tracks))
}
