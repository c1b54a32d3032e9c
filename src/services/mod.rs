// ABOUTME: Domain service layer combining the metrics engine, parser, and image analyzer
// ABOUTME: Provides a protocol-agnostic facade reusable by the CLI and any outer surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer

/// Nutrition targets, meal analysis, and daily summaries
pub mod nutrition_service;

pub use nutrition_service::{FoodImageAnalyzer, ImageAnalysis, NutritionService};
