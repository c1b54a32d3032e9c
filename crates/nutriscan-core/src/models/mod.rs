// ABOUTME: Core data models for the NutriScan nutrition platform
// ABOUTME: Re-exports profile, food analysis, and tracking structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Profile`: body measurements, goal, and activity level of one user
//! - `HealthTargets`: energy and macronutrient targets derived from a profile
//! - `FoodItem` / `AnalysisResult`: structured output of the label parser
//! - `FoodLogEntry` / `ExerciseLogEntry`: what a user records during the day

mod food;
mod profile;
mod tracking;

pub use food::{AnalysisResult, FoodItem, PortionAnnotations};
pub use profile::{
    ActivityLevel, BmiCategory, Gender, Goal, HealthTargets, Profile, ProfileLimits,
};
pub use tracking::{ExerciseLogEntry, FoodLogEntry, MealType};
