// ABOUTME: Core types and constants for the NutriScan nutrition tracking platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriScan` Core
//!
//! Foundation crate providing shared types and constants for the `NutriScan`
//! nutrition platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, analysis wire-format tokens, service names
//! - **models**: Profile, health targets, parsed food items, and tracking logs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `HealthTargets`, `FoodItem`, log entries)
pub mod models;
