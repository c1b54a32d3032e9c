// ABOUTME: Re-exports command modules for nutriscan-cli
// ABOUTME: Provides the targets and analyze commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod targets;
