// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything that can terminate a request before an image is returned.
/// Each variant is detected by exactly one pipeline stage and converted
/// straight into a terminal HTTP response; the same invalid input always
/// produces the same error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Path other than the designated endpoint.
    #[error("Not found")]
    NotFound,

    /// Method outside GET, POST, OPTIONS.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// POST body that does not parse as a JSON object.
    #[error("Invalid JSON body")]
    MalformedBody,

    /// A present field failed its type or range rule. The message names
    /// the field and the rule.
    #[error("{0}")]
    InvalidParameter(String),

    /// The backend call itself failed: transport, timeout or model error.
    #[error("Image generation failed: {0}")]
    BackendError(String),

    /// The backend answered but its encoded image was corrupt. Kept
    /// distinct from `BackendError` so clients can tell "the model
    /// failed" from "the model answered garbage".
    #[error("Failed to decode image data from backend")]
    DecodeError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MalformedBody | ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::BackendError(_) | ApiError::DecodeError => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = (self.status_code(), axum::Json(body)).into_response();
        // CORS origin header is present on all responses, errors included
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}
