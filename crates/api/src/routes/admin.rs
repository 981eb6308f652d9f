//! Administrative routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::seed;
use crate::state::AppState;

/// ```text
/// POST /seed   -> seed tracks and videos
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/seed", post(seed::seed))
}
