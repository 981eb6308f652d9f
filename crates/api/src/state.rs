/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store handle is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Process-wide document store handle.
    pub store: emberlance_db::DbHandle,
}
