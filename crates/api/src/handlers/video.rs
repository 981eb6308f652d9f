//! Handlers for the `/videos` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use emberlance_core::content::Video;
use emberlance_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::query::ContentListParams;
use crate::state::AppState;

/// GET /videos?published_only=true&limit=50
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ContentListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Video>>> {
    let Query(params) = params?;
    let videos =
        ContentRepo::list::<Video>(state.store.as_ref(), params.published_only, Some(params.limit))
            .await?;
    Ok(Json(videos))
}
