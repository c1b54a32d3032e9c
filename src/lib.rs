// ABOUTME: Main library entry point for the NutriScan nutrition tracking core
// ABOUTME: Provides meal analysis parsing, health targets, logging, and service configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriScan`
//!
//! Nutrition tracking core: turns body measurements into daily energy and
//! macronutrient targets, and turns the text returned by a food image
//! analyzer into structured food items with personalized warnings.
//!
//! ## Architecture
//!
//! - **`nutriscan-core`**: errors, constants, and domain models
//! - **`nutriscan-intelligence`**: metrics engine, nutrition config, daily summary
//! - **analysis**: response parser, meal warnings, analyzer prompt
//! - **services**: `NutritionService` facade and the `FoodImageAnalyzer` boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriscan::analysis::analyze_nutrition_text;
//!
//! let result = analyze_nutrition_text(
//!     "Total - Calories: 250 kcal, Protein: 40g, Fat: 8g, Carbs: 0g",
//!     None,
//!     None,
//! );
//! assert_eq!(result.food_items.len(), 1);
//! ```

/// Meal analysis: parser, warnings, and analyzer prompt
pub mod analysis;

/// Service and nutrition configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Logging configuration and structured events
pub mod logging;

/// Domain services
pub mod services;

pub use nutriscan_core::{constants, models};
pub use nutriscan_intelligence::{daily_summary, health_calculator};
