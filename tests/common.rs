// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample profiles, targets, and analyzer responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriscan`

use std::env;
use std::sync::Once;

use nutriscan::models::{ActivityLevel, Gender, Goal, HealthTargets, Profile};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 175 cm, 30 year old sedentary male
pub fn reference_profile(goal: Goal) -> Profile {
    Profile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        goal,
        activity_level: ActivityLevel::Sedentary,
    }
}

/// Round daily targets used by the warning tests
pub fn sample_targets() -> HealthTargets {
    HealthTargets {
        bmi: 22.9,
        bmr: 1649.0,
        tdee: 1979.0,
        target_calories: 2000.0,
        protein_g: 150.0,
        fat_g: 67.0,
        carbs_g: 175.0,
    }
}

/// A Total line with the given values
pub fn total_line(calories: u32, protein_g: u32, fat_g: u32, carbs_g: u32) -> String {
    format!(
        "Total - Calories: {calories} kcal, Protein: {protein_g}g, Fat: {fat_g}g, Carbs: {carbs_g}g"
    )
}

/// Single-meal response in the three-section format
pub const GRILLED_CHICKEN_RESPONSE: &str = "\
1. Grilled Chicken - Calories: 250 kcal, Protein: 40g, Fat: 8g, Carbs: 0g, Portion: 150 grams
Total - Calories: 250 kcal, Protein: 40g, Fat: 8g, Carbs: 0g
---
Grilled Chicken: about the size of a deck of cards
---
Great lean protein choice.";

/// Larger response with comments, an unannotated item, and a missing portion
pub const MIXED_PLATE_RESPONSE: &str = "\
Here is the analysis of your meal:
1. Brown Rice - Calories: 215 kcal, Protein: 5g, Fat: 2g, Carbs: 45g, Portion: 1 cup
2. Steamed Broccoli - Calories: 55 kcal, Protein: 4g, Fat: 1g, Carbs: 11g
3. Salmon Fillet - Calories: 367 kcal, Protein: 39g, Fat: 22g, Carbs: 0g, Portion: 170 grams
Total - Calories: 637 kcal, Protein: 48g, Fat: 25g, Carbs: 56g
---
# Estimated using the fork as reference
Brown Rice: Estimated 195 grams (about the size of a fist)
salmon fillet: Estimated 170 grams (about the size of a smartphone)
---
# Tips
Good balance of complex carbohydrates and protein.

Salmon provides omega-3 fatty acids.
Consider adding a colorful salad for extra fiber.";
