//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET  /       -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(track::list))
}
