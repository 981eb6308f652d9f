//! Route definitions for videos.

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET  /       -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(video::list))
}
