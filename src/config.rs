// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-driven gateway configuration

use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::diffusion::ModelProfile;

const DEFAULT_API_PORT: &str = "8080";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MODEL_PROFILE: &str = "flux-schnell";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen_addr: String,
    pub backend_endpoint: String,
    /// Bearer token for the outbound backend call, when the backend
    /// requires one. This is backend plumbing, not request auth.
    pub backend_api_token: Option<String>,
    /// Deadline for a single backend call; elapsing it surfaces as a
    /// backend error on the request that hit it.
    pub backend_timeout: Duration,
    pub profile: ModelProfile,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let api_port = env::var("API_PORT").unwrap_or_else(|_| DEFAULT_API_PORT.to_string());
        let listen_addr = format!("0.0.0.0:{}", api_port);

        let backend_endpoint =
            env::var("BACKEND_ENDPOINT").context("BACKEND_ENDPOINT must be set")?;
        Url::parse(&backend_endpoint)
            .with_context(|| format!("BACKEND_ENDPOINT is not a valid URL: {}", backend_endpoint))?;

        let backend_api_token = env::var("BACKEND_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let backend_timeout = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS));

        let profile_name =
            env::var("MODEL_PROFILE").unwrap_or_else(|_| DEFAULT_MODEL_PROFILE.to_string());
        let profile = ModelProfile::by_name(&profile_name).ok_or_else(|| {
            anyhow!(
                "Unknown MODEL_PROFILE '{}'; expected flux-schnell or sdxl-base",
                profile_name
            )
        })?;

        Ok(Self {
            listen_addr,
            backend_endpoint,
            backend_api_token,
            backend_timeout,
            profile,
        })
    }
}
