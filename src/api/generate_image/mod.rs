// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The `/api` generation endpoint: request normalization, validation,
//! payload assembly and response encoding

pub mod handler;
pub mod params;
pub mod payload;
pub mod validate;

pub use handler::api_handler;
pub use params::{from_body, from_query, RequestParams};
pub use payload::build_payload;
pub use validate::{validate, GenerateRequest};
