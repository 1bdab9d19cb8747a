// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request normalizer: merges GET query strings and POST JSON bodies
//! into one uniform parameter map

use serde_json::{Map, Value};

use crate::api::errors::ApiError;

/// Loosely-typed parameter map scoped to a single request. Values are
/// raw strings on the GET path and arbitrary JSON on the POST path;
/// type coercion is the validator's job.
pub type RequestParams = Map<String, Value>;

/// Normalize a GET query string. Duplicate keys: last write wins.
pub fn from_query(query: Option<&str>) -> RequestParams {
    let mut params = Map::new();
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params.insert(key.into_owned(), Value::String(value.into_owned()));
        }
    }
    params
}

/// Normalize a POST body. Anything that is not a JSON object is rejected.
pub fn from_body(body: &[u8]) -> Result<RequestParams, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::MalformedBody),
    }
}
