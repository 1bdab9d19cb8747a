// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dispatch and pipeline for the `/api` endpoint

use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, info, warn};

use super::params::{self, RequestParams};
use super::payload::build_payload;
use super::validate::validate;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// img2img requests carry inline image bytes, so the body cap sits well
/// above text-only payloads.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Entry point for the `/api` route.
///
/// OPTIONS is answered before any normalization runs; GET and POST feed
/// the generation pipeline; every other method is rejected.
pub async fn api_handler(State(state): State<AppState>, request: Request) -> Response {
    let result = match *request.method() {
        Method::OPTIONS => return preflight_response(),
        Method::GET => {
            let params = params::from_query(request.uri().query());
            generate(&state, params).await
        }
        Method::POST => match read_body(request).await {
            Ok(body) => match params::from_body(&body) {
                Ok(params) => generate(&state, params).await,
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        },
        _ => Err(ApiError::MethodNotAllowed),
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            warn!("Request rejected: {}", e);
            e.into_response()
        }
    }
}

/// Validating -> Building -> Invoking -> Decoding -> Responding. Each
/// stage converts its first failure into the terminal error response.
async fn generate(state: &AppState, params: RequestParams) -> Result<Response, ApiError> {
    let profile = &state.profile;

    let request = validate(&params, profile)?;
    debug!(
        "Generation request validated: prompt_len={}, model={}",
        request.prompt.len(),
        profile.model_id
    );

    let payload = build_payload(&request, profile);

    let backend_image = state
        .backend
        .invoke(profile.model_id, &payload)
        .await
        .map_err(|e| ApiError::BackendError(e.to_string()))?;

    let image_bytes = BASE64
        .decode(backend_image.image.as_bytes())
        .map_err(|_| ApiError::DecodeError)?;

    info!(
        "Image generated: model={}, bytes={}",
        profile.model_id,
        image_bytes.len()
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, profile.mime_type()),
            // generated fresh per request, never cacheable
            (header::CACHE_CONTROL, "no-store"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        image_bytes,
    )
        .into_response())
}

async fn read_body(request: Request) -> Result<axum::body::Bytes, ApiError> {
    axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| ApiError::MalformedBody)
}

/// CORS preflight: 204 with no body, independent of query parameters.
fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}
