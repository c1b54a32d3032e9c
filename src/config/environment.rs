// ABOUTME: Environment configuration for service-level settings of the NutriScan service
// ABOUTME: Parses deployment environment, log level, and image analyzer settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based service configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, Level};

use crate::logging::{LogFormat, LoggingConfig};

/// Default model requested from the image analyzer
pub const DEFAULT_ANALYZER_MODEL: &str = "gemini-1.5-flash";

/// Default deadline for one image analysis call (seconds)
pub const DEFAULT_ANALYZER_TIMEOUT_SECS: u64 = 60;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Debug events
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback to info
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings for the external image analyzer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Model name requested from the vision service
    pub model: String,
    /// Deadline for one analysis call (seconds)
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_ANALYZER_MODEL.to_owned(),
            timeout_secs: DEFAULT_ANALYZER_TIMEOUT_SECS,
        }
    }
}

impl AnalyzerConfig {
    /// Deadline for one analysis call
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Service-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Image analyzer settings
    pub analyzer: AnalyzerConfig,
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `NUTRISCAN_ANALYZER_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self> {
        let timeout_secs: u64 = env_var_or(
            "NUTRISCAN_ANALYZER_TIMEOUT_SECS",
            &DEFAULT_ANALYZER_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .context("Invalid NUTRISCAN_ANALYZER_TIMEOUT_SECS value")?;
        if timeout_secs == 0 {
            anyhow::bail!("NUTRISCAN_ANALYZER_TIMEOUT_SECS must be greater than zero");
        }

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            analyzer: AnalyzerConfig {
                model: env_var_or("NUTRISCAN_ANALYZER_MODEL", DEFAULT_ANALYZER_MODEL),
                timeout_secs,
            },
        };

        info!(
            environment = %config.environment,
            analyzer.model = %config.analyzer.model,
            analyzer.timeout_secs = config.analyzer.timeout_secs,
            "Service configuration loaded"
        );
        Ok(config)
    }

    /// Logging configuration matching this service configuration
    #[must_use]
    pub fn logging_config(&self) -> LoggingConfig {
        let from_env = LoggingConfig::from_env();
        LoggingConfig {
            level: self.log_level.to_string(),
            format: if self.environment.is_production() {
                LogFormat::Json
            } else {
                from_env.format
            },
            environment: self.environment.to_string(),
            ..from_env
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
