// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod diffusion;

// Re-export main types
pub use api::{build_router, start_server, ApiError, AppState, ErrorResponse};
pub use config::GatewayConfig;
pub use diffusion::{BackendImage, HttpImageBackend, ImageBackend, ImageFormat, ModelProfile};
