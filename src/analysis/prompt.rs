// ABOUTME: Instruction prompt and image payload handed to the external food image analyzer
// ABOUTME: Loads the three-section analysis prompt at compile time and encodes images as base64
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analysis Hand-off
//!
//! The prompt asks the vision service for the exact three-section format the
//! parser understands. It is kept as markdown next to this module and loaded
//! at compile time.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use nutriscan_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Instruction text sent alongside every food image
pub const NUTRITION_ANALYSIS_PROMPT: &str = include_str!("prompts/nutrition_analysis.md");

/// Image description sent when the user did not describe the photo
pub const DEFAULT_IMAGE_DESCRIPTION: &str = "Food items in the image";

/// An uploaded food image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    /// MIME type reported by the upload (e.g. `image/jpeg`)
    pub mime_type: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

/// Wire form of an image: base64 data plus MIME type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImagePayload {
    /// Base64 encoded image bytes
    pub data: String,
    /// MIME type of the image
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

impl ImagePart {
    /// Wrap uploaded bytes
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when no image bytes were provided
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> AppResult<Self> {
        if data.is_empty() {
            return Err(AppError::missing_field("No image provided"));
        }
        Ok(Self {
            mime_type: mime_type.into(),
            data,
        })
    }

    /// Decode a wire payload
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed base64, or `MissingRequiredField`
    /// when the payload decodes to nothing
    pub fn from_payload(payload: &ImagePayload) -> AppResult<Self> {
        let data = STANDARD.decode(&payload.data).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, "Image data is not valid base64")
                .with_source(e)
        })?;
        Self::new(payload.mime_type.clone(), data)
    }

    /// Base64 encoded image bytes
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Wire form for transport to the analyzer
    #[must_use]
    pub fn to_payload(&self) -> ImagePayload {
        ImagePayload {
            data: self.to_base64(),
            mime_type: self.mime_type.clone(),
        }
    }
}
