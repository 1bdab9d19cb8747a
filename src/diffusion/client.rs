// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the generative-image backend

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Response shape of a generation call: a single base64-encoded image.
/// The text stays opaque until the responder decodes it.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendImage {
    pub image: String,
}

/// One-method interface to the generative-image service. The pipeline
/// entry point takes this as an explicit dependency so tests can
/// substitute a fake.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    /// Issue exactly one generation call against `model_id`. No retries;
    /// a failed call surfaces immediately.
    async fn invoke(&self, model_id: &str, payload: &Value) -> Result<BackendImage>;
}

/// Backend reachable over HTTP: POST `{endpoint}/{model_id}` with a JSON
/// payload, optionally bearer-authenticated. The client timeout is the
/// deadline for the whole call; elapsing it fails the invocation.
pub struct HttpImageBackend {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpImageBackend {
    pub fn new(endpoint: &str, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Image backend configured: endpoint={}, timeout={}s",
            endpoint,
            timeout.as_secs()
        );

        Ok(Self {
            client,
            endpoint,
            api_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ImageBackend for HttpImageBackend {
    async fn invoke(&self, model_id: &str, payload: &Value) -> Result<BackendImage> {
        let url = format!("{}/{}", self.endpoint, model_id);
        debug!("Backend invoke POST {}", url);

        let mut request = self.client.post(&url).json(payload);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("image backend returned {}: {}", status, text));
        }

        let image: BackendImage = response
            .json()
            .await
            .map_err(|e| anyhow!("image backend sent an unexpected response: {}", e))?;

        Ok(image)
    }
}
