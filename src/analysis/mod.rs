// ABOUTME: Food analysis pipeline turning raw analyzer text into a structured AnalysisResult
// ABOUTME: Combines the section parser, personalized warnings, and the analyzer prompt contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Analysis
//!
//! - **parser**: three-section response parsing into food items, portions, and tips
//! - **warnings**: meal warnings against the user's daily targets
//! - **prompt**: instruction text and image payload for the external analyzer

/// Three-section response parser
pub mod parser;
/// Analyzer prompt and image payload
pub mod prompt;
/// Personalized meal warnings
pub mod warnings;

pub use parser::{
    classify_nutrition_line, parse_nutrition_response, parse_portion_line, parse_tip_line,
    ParseState, ParsedNutrition,
};
pub use prompt::{
    ImagePart, ImagePayload, DEFAULT_IMAGE_DESCRIPTION, NUTRITION_ANALYSIS_PROMPT,
};
pub use warnings::derive_health_warnings;

use nutriscan_core::models::{AnalysisResult, HealthTargets, Profile};
use nutriscan_intelligence::config::{NutritionConfig, WarningThresholdsConfig};

/// Analyze a raw response using the global warning thresholds
///
/// Never fails. Warnings are only derived when both `profile` and `targets`
/// are supplied.
#[must_use]
pub fn analyze_nutrition_text(
    raw: &str,
    profile: Option<&Profile>,
    targets: Option<&HealthTargets>,
) -> AnalysisResult {
    analyze_nutrition_text_with(raw, profile, targets, &NutritionConfig::global().warnings)
}

/// Analyze a raw response with explicit warning thresholds
#[must_use]
pub fn analyze_nutrition_text_with(
    raw: &str,
    profile: Option<&Profile>,
    targets: Option<&HealthTargets>,
    thresholds: &WarningThresholdsConfig,
) -> AnalysisResult {
    let parsed = parse_nutrition_response(raw);
    let warnings = derive_health_warnings(&parsed, profile, targets, thresholds);
    parsed.into_result(warnings)
}
