// ABOUTME: Nutrition service facade over the metrics engine, response parser, and image analyzer
// ABOUTME: Defines the FoodImageAnalyzer boundary and maps collaborator failures to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriscan_core::constants::service_names;
use nutriscan_core::errors::{AppError, AppResult, ErrorCode};
use nutriscan_core::models::{
    AnalysisResult, ExerciseLogEntry, FoodLogEntry, HealthTargets, Profile,
};
use nutriscan_intelligence::config::NutritionConfig;
use nutriscan_intelligence::daily_summary::{summarize_day, DailySummary};
use nutriscan_intelligence::health_calculator::compute_health_targets;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::analysis::{
    analyze_nutrition_text_with, ImagePart, DEFAULT_IMAGE_DESCRIPTION, NUTRITION_ANALYSIS_PROMPT,
};
use crate::config::AnalyzerConfig;
use crate::logging::AppLogger;

/// External vision service that describes a food image as text
///
/// Implementations own transport, authentication, and retries. The returned
/// text is expected in the three-section format requested by the prompt.
#[async_trait]
pub trait FoodImageAnalyzer: Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &'static str {
        service_names::IMAGE_ANALYZER
    }

    /// Analyze one image with the given instruction prompt
    ///
    /// `description` is the user's note about what the photo shows, sent
    /// alongside the image as extra context.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot produce a response
    async fn analyze(
        &self,
        prompt: &str,
        description: &str,
        image: &ImagePart,
    ) -> AppResult<String>;
}

/// Outcome of analyzing one food image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageAnalysis {
    /// Text returned by the analyzer, unmodified
    pub raw_response: String,
    /// Structured result parsed from the response
    pub result: AnalysisResult,
}

/// Entry point for nutrition operations
pub struct NutritionService {
    analyzer: Arc<dyn FoodImageAnalyzer>,
    config: NutritionConfig,
    analysis_timeout: Duration,
}

impl NutritionService {
    /// Create a service with explicit configuration
    #[must_use]
    pub fn new(
        analyzer: Arc<dyn FoodImageAnalyzer>,
        config: NutritionConfig,
        analyzer_config: &AnalyzerConfig,
    ) -> Self {
        Self {
            analyzer,
            config,
            analysis_timeout: analyzer_config.timeout(),
        }
    }

    /// Create a service using the global nutrition configuration
    #[must_use]
    pub fn with_defaults(analyzer: Arc<dyn FoodImageAnalyzer>) -> Self {
        Self::new(
            analyzer,
            NutritionConfig::global().clone(),
            &AnalyzerConfig::default(),
        )
    }

    /// Nutrition configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Validate a profile and compute its health targets
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the profile is outside the accepted ranges
    pub fn compute_targets(&self, profile: &Profile) -> AppResult<HealthTargets> {
        profile.validate(&self.config.profile_limits)?;
        let targets = compute_health_targets(profile, &self.config);
        AppLogger::log_targets_computed(
            profile.goal.as_str(),
            profile.activity_level.as_str(),
            targets.target_calories,
        );
        Ok(targets)
    }

    /// Parse an analyzer response and derive warnings
    #[must_use]
    pub fn analyze_text(
        &self,
        raw: &str,
        profile: Option<&Profile>,
        targets: Option<&HealthTargets>,
    ) -> AnalysisResult {
        let result = analyze_nutrition_text_with(raw, profile, targets, &self.config.warnings);
        AppLogger::log_analysis_parsed(
            result.food_items.len(),
            result.portion_info.len(),
            result.health_tips.len(),
            result.total().is_some(),
        );
        if !result.warnings.is_empty() {
            AppLogger::log_warnings_derived(
                result.warnings.len(),
                profile.map(|p| p.goal.as_str()),
            );
        }
        result
    }

    /// Send an image to the analyzer and parse its response
    ///
    /// `description` falls back to [`DEFAULT_IMAGE_DESCRIPTION`] when absent or blank.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty image,
    /// `ExternalServiceUnavailable` when the analyzer exceeds its deadline,
    /// and `ExternalServiceError` when the analyzer fails
    pub async fn analyze_image(
        &self,
        image: &ImagePart,
        description: Option<&str>,
        profile: Option<&Profile>,
        targets: Option<&HealthTargets>,
    ) -> AppResult<ImageAnalysis> {
        if image.data.is_empty() {
            return Err(AppError::missing_field("No image provided"));
        }
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_IMAGE_DESCRIPTION);

        let service = self.analyzer.name();
        debug!(
            analyzer = service,
            mime_type = %image.mime_type,
            bytes = image.data.len(),
            "Requesting image analysis"
        );

        let started = Instant::now();
        let outcome = timeout(
            self.analysis_timeout,
            self.analyzer.analyze(NUTRITION_ANALYSIS_PROMPT, description, image),
        )
        .await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let raw_response = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(error)) => {
                AppLogger::log_external_analysis_failure(service, &error.message, duration_ms);
                return Err(
                    AppError::external_service(service, error.message.clone()).with_source(error)
                );
            }
            Err(elapsed) => {
                let message = format!(
                    "{service}: no response within {}s",
                    self.analysis_timeout.as_secs()
                );
                AppLogger::log_external_analysis_failure(service, &message, duration_ms);
                return Err(
                    AppError::new(ErrorCode::ExternalServiceUnavailable, message)
                        .with_source(elapsed),
                );
            }
        };

        info!(
            analyzer = service,
            duration_ms,
            response_chars = raw_response.len(),
            "Image analysis completed"
        );

        let result = self.analyze_text(&raw_response, profile, targets);
        Ok(ImageAnalysis {
            raw_response,
            result,
        })
    }

    /// Aggregate one day of food and exercise logs
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn summarize_day(
        &self,
        date: NaiveDate,
        food_logs: &[FoodLogEntry],
        exercise_logs: &[ExerciseLogEntry],
    ) -> DailySummary {
        summarize_day(date, food_logs, exercise_logs)
    }
}
