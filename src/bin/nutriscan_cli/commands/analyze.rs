// ABOUTME: Analyze command for nutriscan-cli
// ABOUTME: Parses a saved analyzer response file and prints the AnalysisResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use nutriscan::analysis::analyze_nutrition_text_with;
use nutriscan::config::NutritionConfig;
use nutriscan::errors::AppResult;
use nutriscan::health_calculator::compute_health_targets;
use tokio::fs;
use tracing::{info, warn};

use crate::helpers::display::print_json;
use crate::helpers::profile::optional_profile_from_args;
use crate::OptionalProfileArgs;

/// Parse the response stored in `file` and print the result
pub async fn run(file: &Path, args: &OptionalProfileArgs) -> AppResult<()> {
    let config = NutritionConfig::global();
    let raw = fs::read_to_string(file).await?;

    let profile = optional_profile_from_args(args);
    if let Some(profile) = &profile {
        profile.validate(&config.profile_limits)?;
    }
    let targets = profile
        .as_ref()
        .map(|profile| compute_health_targets(profile, config));

    let result =
        analyze_nutrition_text_with(&raw, profile.as_ref(), targets.as_ref(), &config.warnings);

    if result.has_food_items() {
        info!(
            file = %file.display(),
            food_items = result.food_items.len(),
            warnings = result.warnings.len(),
            "Analysis parsed"
        );
    } else {
        warn!(file = %file.display(), "No food items detected in response");
    }

    print_json(&result)
}
