// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Backend model profiles: validation limits, defaults and request shape
//! for each supported generative model

/// Encoding of the image bytes a model produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

/// One backend model: its identifier, step limits, the wire name it uses
/// for the step count, whether it accepts the extended field set
/// (negative prompt, guidance, strength and the img2img inputs), and the
/// format of the image it returns.
///
/// The whole request pipeline is parameterized by one of these instead of
/// being duplicated per model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelProfile {
    pub name: &'static str,
    pub model_id: &'static str,
    /// Field name the backend expects the step count under.
    pub steps_field: &'static str,
    /// Inclusive upper bound for `num_steps`/`steps`; the lower bound is 1.
    pub max_steps: u32,
    /// Applied by the payload builder when the caller omits the step count.
    pub default_steps: u32,
    /// Fast low-step models accept only prompt, steps, width, height and
    /// seed; models with this flag set also take the extended fields.
    pub extended_fields: bool,
    pub output_format: ImageFormat,
}

impl ModelProfile {
    /// Fast low-step text-to-image model. Returns a base64 JPEG.
    pub fn flux_schnell() -> Self {
        Self {
            name: "flux-schnell",
            model_id: "@cf/black-forest-labs/flux-1-schnell",
            steps_field: "steps",
            max_steps: 8,
            default_steps: 4,
            extended_fields: false,
            output_format: ImageFormat::Jpeg,
        }
    }

    /// Higher-fidelity model with negative-prompt and img2img support.
    /// Returns a base64 PNG.
    pub fn sdxl_base() -> Self {
        Self {
            name: "sdxl-base",
            model_id: "@cf/stabilityai/stable-diffusion-xl-base-1.0",
            steps_field: "num_steps",
            max_steps: 20,
            default_steps: 20,
            extended_fields: true,
            output_format: ImageFormat::Png,
        }
    }

    /// Look up a profile by its configuration name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "flux-schnell" | "flux" => Some(Self::flux_schnell()),
            "sdxl-base" | "sdxl" => Some(Self::sdxl_base()),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.output_format.mime_type()
    }
}
