// ABOUTME: Health metrics engine, nutrition configuration, and daily tracking aggregation
// ABOUTME: Pure calculations with no I/O, extracted from the main crate for modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriScan` Intelligence
//!
//! - **`health_calculator`**: BMI, BMR, TDEE, target calories, macronutrient split
//! - **config**: `NutritionConfig` with environment overrides and validation
//! - **`daily_summary`**: daily totals, net calories, and progress against targets

/// Nutrition configuration and its error type
pub mod config;

/// Daily food/exercise aggregation
pub mod daily_summary;

/// Health metrics engine
pub mod health_calculator;

pub use config::{ConfigError, NutritionConfig};
pub use daily_summary::{
    summarize_day, DailyProgress, DailySummary, MacroCalorieSplit, MealTotals,
};
pub use health_calculator::{
    bmi_category, calculate_bmi, calculate_bmr, calculate_macronutrients,
    calculate_target_calories, calculate_tdee, compute_health_targets,
    compute_health_targets_batch, MacronutrientTargets,
};
