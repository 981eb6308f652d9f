//! Tests for the `AppError` to HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use emberlance_api::error::AppError;
use emberlance_core::error::CoreError;
use emberlance_db::DbError;
use http_body_util::BodyExt;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// CoreError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_lists_fields() {
    let err = CoreError::Validation {
        fields: vec!["email".into(), "name".into()],
        message: "email: must be a valid email address; name: must not be empty".into(),
    };
    let (status, json) = render(err.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"], serde_json::json!(["email", "name"]));
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn core_not_found_is_404() {
    let err = CoreError::NotFound {
        entity: "Track",
        id: "abc".into(),
    };
    let (status, json) = render(err.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn core_internal_is_sanitized() {
    let (status, json) = render(CoreError::Internal("secret detail".into()).into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}

// ---------------------------------------------------------------------------
// DbError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unavailable_store_is_503() {
    let err = DbError::Unavailable("connection refused at 10.0.0.3".into());
    let (status, json) = render(err.into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("10.0.0.3"));
}

#[tokio::test]
async fn missing_written_record_is_internal() {
    let err = DbError::NotFound {
        collection: "track",
        id: "ghost".into(),
    };
    let (status, json) = render(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn inconsistent_record_is_internal() {
    let err = DbError::Inconsistent {
        collection: "video",
        reason: "missing _id".into(),
    };
    let (status, _json) = render(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ---------------------------------------------------------------------------
// HTTP-specific
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_keeps_message() {
    let (status, json) = render(AppError::BadRequest("limit must be a number".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "limit must be a number");
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, json) = render(AppError::InternalError("stack trace".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}
