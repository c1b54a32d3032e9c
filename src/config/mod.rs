// ABOUTME: Configuration module for service settings and nutrition coefficients
// ABOUTME: Re-exports the environment-driven service config and the nutrition config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for `NutriScan`
//!
//! - **Environment**: service settings from environment variables
//! - **Nutrition**: metrics engine and warning coefficients, from the
//!   `nutriscan-intelligence` crate

/// Environment and service configuration
pub mod environment;

pub use environment::{AnalyzerConfig, Environment, LogLevel, ServiceConfig};
pub use nutriscan_intelligence::config::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, ConfigError, GoalAdjustmentConfig,
    MacroDistribution, MacroSplitConfig, NutritionConfig, WarningThresholdsConfig,
};
