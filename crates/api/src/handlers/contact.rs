//! Handlers for the `/contact` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use emberlance_core::content::{ContactMessage, ContentContract};
use emberlance_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /contact
///
/// Validate and store a contact-form submission, returning the stored record.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.check()?;

    let record = ContentRepo::create(state.store.as_ref(), &input).await?;
    tracing::info!(id = %record.id, source = ?input.source, "Contact message received");

    Ok(Json(SuccessResponse::new(record)))
}
