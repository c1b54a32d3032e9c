// ABOUTME: Error handling re-exports for the NutriScan crate
// ABOUTME: Exposes the unified AppError system defined in nutriscan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Error codes and `AppError` live in `nutriscan-core`; this module re-exports
//! them so callers only depend on this crate.

pub use nutriscan_core::errors::{AppError, AppResult, ErrorCode};
pub use nutriscan_intelligence::config::ConfigError;
