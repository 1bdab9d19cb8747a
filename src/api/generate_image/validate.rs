// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Parameter validator: turns the loose parameter map into a typed
//! request, or fails with the first rule violation

use serde_json::Value;

use super::params::RequestParams;
use crate::api::errors::ApiError;
use crate::diffusion::ModelProfile;

/// Strongly-typed generation request. Every present field satisfies its
/// rule; absent optional fields stay `None` here and are defaulted, where
/// a default exists, by the payload builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub num_steps: Option<u32>,
    pub guidance: Option<f64>,
    pub strength: Option<f64>,
    pub seed: Option<u64>,
    pub image: Option<Vec<u8>>,
    /// Forwarded to the backend undecoded.
    pub image_b64: Option<String>,
    pub mask: Option<Vec<u8>>,
}

/// Check every present field against the rule table, in a fixed order so
/// error precedence is deterministic: prompt, negative_prompt, width,
/// height, num_steps, guidance, strength, seed, image, image_b64, mask.
pub fn validate(
    params: &RequestParams,
    profile: &ModelProfile,
) -> Result<GenerateRequest, ApiError> {
    let prompt = params
        .get("prompt")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            ApiError::InvalidParameter("Missing required parameter: prompt".to_string())
        })?
        .to_string();

    let negative_prompt = string_field(params, "negative_prompt");

    let width = integer_field(params, "width", 256, 2048, "`width` must be 256-2048")?
        .map(|w| w as u32);
    let height = integer_field(params, "height", 256, 2048, "`height` must be 256-2048")?
        .map(|h| h as u32);

    // `steps` is an accepted alias; `num_steps` wins when both are sent
    let steps_key = if params.contains_key("num_steps") {
        "num_steps"
    } else {
        "steps"
    };
    let steps_rule = format!("`num_steps`/`steps` must be 1-{}", profile.max_steps);
    let num_steps = integer_field(params, steps_key, 1, profile.max_steps as u64, &steps_rule)?
        .map(|s| s as u32);

    let guidance = numeric_field(params, "guidance", "`guidance` must be a number")?;

    let strength = numeric_field(params, "strength", "`strength` must be between 0 and 1")?;
    if let Some(s) = strength {
        if !(0.0..=1.0).contains(&s) {
            return Err(ApiError::InvalidParameter(
                "`strength` must be between 0 and 1".to_string(),
            ));
        }
    }

    let seed = integer_field(params, "seed", 0, u64::MAX, "`seed` must be an integer")?;

    let image = byte_array_field(params, "image");
    let image_b64 = string_field(params, "image_b64");
    let mask = byte_array_field(params, "mask");

    Ok(GenerateRequest {
        prompt,
        negative_prompt,
        width,
        height,
        num_steps,
        guidance,
        strength,
        seed,
        image,
        image_b64,
        mask,
    })
}

/// Numeric coercion shared by every numeric rule. Numbers pass through;
/// strings (the GET path) use standard decimal parsing, and a failed
/// parse makes the field absent rather than invalid; null is absent; any
/// other JSON type is a type violation reported with the field's rule.
fn numeric_field(
    params: &RequestParams,
    key: &str,
    rule: &str,
) -> Result<Option<f64>, ApiError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(Value::String(s)) => Ok(s.trim().parse::<f64>().ok()),
        Some(_) => Err(ApiError::InvalidParameter(rule.to_string())),
    }
}

/// Integer rule: numeric coercion first, then integrality and range.
fn integer_field(
    params: &RequestParams,
    key: &str,
    lo: u64,
    hi: u64,
    rule: &str,
) -> Result<Option<u64>, ApiError> {
    let Some(n) = numeric_field(params, key, rule)? else {
        return Ok(None);
    };
    if n.fract() != 0.0 || n < lo as f64 || n > hi as f64 {
        return Err(ApiError::InvalidParameter(rule.to_string()));
    }
    Ok(Some(n as u64))
}

/// Optional string fields carry no rule beyond their type; anything
/// non-string is silently ignored.
fn string_field(params: &RequestParams, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `image` and `mask` arrive as JSON arrays of byte values. Any other
/// shape, or any element outside 0-255, silently drops the field.
fn byte_array_field(params: &RequestParams, key: &str) -> Option<Vec<u8>> {
    let values = params.get(key)?.as_array()?;
    let mut bytes = Vec::with_capacity(values.len());
    for value in values {
        let n = value.as_u64()?;
        if n > 255 {
            return None;
        }
        bytes.push(n as u8);
    }
    Some(bytes)
}
