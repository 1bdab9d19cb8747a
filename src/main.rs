// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_image_gateway::{api, config::GatewayConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first, system environment wins on conflicts
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        "Starting image gateway: profile={}, model={}, backend={}",
        config.profile.name,
        config.profile.model_id,
        config.backend_endpoint
    );

    api::start_server(config).await
}
