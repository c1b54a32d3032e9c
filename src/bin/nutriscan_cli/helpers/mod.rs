// ABOUTME: Helper modules for nutriscan-cli
// ABOUTME: Provides output formatting and profile flag conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod profile;
