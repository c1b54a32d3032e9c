// ABOUTME: Targets command for nutriscan-cli
// ABOUTME: Validates a profile and prints its health targets with the BMI category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan::config::NutritionConfig;
use nutriscan::errors::AppResult;
use nutriscan::health_calculator::{bmi_category, compute_health_targets};
use serde_json::json;
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::profile::profile_from_args;
use crate::ProfileArgs;

/// Compute and print targets for the profile given on the command line
pub fn run(args: &ProfileArgs, skip_validation: bool) -> AppResult<()> {
    let config = NutritionConfig::global();
    let profile = profile_from_args(args);

    if skip_validation {
        info!("Skipping profile range validation");
    } else {
        profile.validate(&config.profile_limits)?;
    }

    let targets = compute_health_targets(&profile, config);
    let category = bmi_category(targets.bmi, &config.bmi);

    print_json(&json!({
        "profile": profile,
        "targets": targets,
        "bmi_category": category.as_str(),
    }))
}
