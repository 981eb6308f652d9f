//! Route definitions for contact messages.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /   -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit))
}
