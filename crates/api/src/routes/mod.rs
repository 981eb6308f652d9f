pub mod admin;
pub mod contact;
pub mod health;
pub mod track;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the public API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                                         submit (POST)
/// /tracks                                          list (GET)
/// /videos                                          list (GET)
/// /seed                                            bulk content insert (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::router())
        .nest("/tracks", track::router())
        .nest("/videos", video::router())
        .merge(admin::router())
}
