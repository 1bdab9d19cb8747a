// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_image;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use generate_image::{api_handler, GenerateRequest, RequestParams};
pub use http_server::{build_router, start_server, AppState};
