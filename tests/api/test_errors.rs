// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the error taxonomy and its HTTP rendering

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use fabstir_image_gateway::{ApiError, ErrorResponse};

#[test]
fn test_status_codes() {
    assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        ApiError::MethodNotAllowed.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(ApiError::MalformedBody.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::InvalidParameter("`seed` must be an integer".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::BackendError("quota exceeded".to_string()).status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(ApiError::DecodeError.status_code(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_backend_and_decode_errors_have_distinct_messages() {
    let backend = ApiError::BackendError("model exploded".to_string()).to_string();
    let decode = ApiError::DecodeError.to_string();
    assert!(backend.starts_with("Image generation failed"));
    assert!(decode.contains("decode"));
    assert_ne!(backend, decode);
}

#[test]
fn test_invalid_parameter_message_passes_through() {
    let err = ApiError::InvalidParameter("`width` must be 256-2048".to_string());
    assert_eq!(err.to_string(), "`width` must be 256-2048");
}

#[test]
fn test_error_response_json_shape() {
    let body = ErrorResponse {
        error: "Invalid JSON body".to_string(),
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({"error": "Invalid JSON body"}));
}

#[tokio::test]
async fn test_into_response_renders_json_with_cors() {
    let response = ApiError::MalformedBody.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "Invalid JSON body");
}
