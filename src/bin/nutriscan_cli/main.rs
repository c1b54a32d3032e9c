// ABOUTME: NutriScan CLI for computing health targets and analyzing saved analyzer responses
// ABOUTME: Prints results as JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute daily targets for a profile
//! nutriscan-cli targets --weight 70 --height 175 --age 30 --gender male --goal cutting --activity sedentary
//!
//! # Parse a saved analyzer response
//! nutriscan-cli analyze --file response.txt
//!
//! # Parse with personalized warnings
//! nutriscan-cli analyze --file response.txt --weight 70 --height 175 --age 30 --goal bulking
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriscan::config::ServiceConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriscan-cli",
    about = "NutriScan nutrition CLI",
    long_about = "Compute daily energy and macronutrient targets, and parse food image analysis responses."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute health targets for a profile
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Skip the accepted-range check on weight, height, and age
        #[arg(long)]
        skip_validation: bool,
    },

    /// Parse a saved analyzer response
    Analyze {
        /// File containing the raw analyzer response
        #[arg(long)]
        file: PathBuf,

        #[command(flatten)]
        profile: OptionalProfileArgs,
    },
}

/// Profile flags, all required except the enums
#[derive(Args)]
pub struct ProfileArgs {
    /// Body weight (kg)
    #[arg(long)]
    pub weight: f64,

    /// Height (cm)
    #[arg(long)]
    pub height: f64,

    /// Age (years)
    #[arg(long)]
    pub age: u32,

    /// male or female
    #[arg(long, default_value = "male")]
    pub gender: String,

    /// bulking, cutting, or maintaining
    #[arg(long, default_value = "maintaining")]
    pub goal: String,

    /// sedentary, lightly_active, moderately_active, very_active, or extra_active
    #[arg(long, default_value = "sedentary")]
    pub activity: String,
}

/// Profile flags for commands where the profile is optional
#[derive(Args)]
pub struct OptionalProfileArgs {
    /// Body weight (kg)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height (cm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Age (years)
    #[arg(long)]
    pub age: Option<u32>,

    /// male or female
    #[arg(long, default_value = "male")]
    pub gender: String,

    /// bulking, cutting, or maintaining
    #[arg(long, default_value = "maintaining")]
    pub goal: String,

    /// sedentary, lightly_active, moderately_active, very_active, or extra_active
    #[arg(long, default_value = "sedentary")]
    pub activity: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let service_config = ServiceConfig::from_env()?;
    let mut logging = service_config.logging_config();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;
    debug!(environment = %service_config.environment, "NutriScan CLI");

    match cli.command {
        Command::Targets {
            profile,
            skip_validation,
        } => commands::targets::run(&profile, skip_validation)?,
        Command::Analyze { file, profile } => commands::analyze::run(&file, &profile).await?,
    }

    Ok(())
}
