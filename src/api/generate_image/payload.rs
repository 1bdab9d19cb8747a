// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Payload builder: assembles the backend-ready body from a validated
//! request and the active model profile

use serde_json::{json, Value};

use super::validate::GenerateRequest;
use crate::diffusion::ModelProfile;

/// Pure transformation of (validated request, profile) into the backend
/// payload: `prompt` always, the step count under the profile's wire name
/// (defaulted when omitted), and each remaining field only when present
/// and accepted by the profile's request shape. Nothing else is invented.
pub fn build_payload(request: &GenerateRequest, profile: &ModelProfile) -> Value {
    let mut payload = json!({
        "prompt": request.prompt,
    });
    payload[profile.steps_field] = json!(request.num_steps.unwrap_or(profile.default_steps));

    if let Some(width) = request.width {
        payload["width"] = json!(width);
    }
    if let Some(height) = request.height {
        payload["height"] = json!(height);
    }
    if let Some(seed) = request.seed {
        payload["seed"] = json!(seed);
    }

    if profile.extended_fields {
        if let Some(ref negative_prompt) = request.negative_prompt {
            payload["negative_prompt"] = json!(negative_prompt);
        }
        if let Some(guidance) = request.guidance {
            payload["guidance"] = json!(guidance);
        }
        if let Some(strength) = request.strength {
            payload["strength"] = json!(strength);
        }
        if let Some(ref image) = request.image {
            payload["image"] = json!(image);
        }
        if let Some(ref image_b64) = request.image_b64 {
            payload["image_b64"] = json!(image_b64);
        }
        if let Some(ref mask) = request.mask {
            payload["mask"] = json!(mask);
        }
    }

    payload
}
