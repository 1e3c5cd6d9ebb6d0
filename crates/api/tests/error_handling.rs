//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use poetry_api::error::AppError;
use poetry_core::error::CoreError;
use poetry_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Poem",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Poem with id 42 not found");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation(
        "missing required fields: title".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "missing required fields: title");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid JSON body".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "invalid JSON body");
}

#[tokio::test]
async fn store_validation_error_returns_400() {
    let err = AppError::Store(StoreError::Validation("no fields to update".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "no fields to update");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::database("list poems")(
        sqlx::Error::Protocol("secret connection string leaked".into()),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "An internal error occurred");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn pool_timeout_returns_500() {
    let err = AppError::Store(StoreError::database("fetch poem")(
        sqlx::Error::PoolTimedOut,
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}
