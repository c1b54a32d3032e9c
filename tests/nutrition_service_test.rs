// ABOUTME: Integration tests for the nutrition service facade
// ABOUTME: Uses in-process analyzer doubles to cover success, failures, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriscan::analysis::{ImagePart, DEFAULT_IMAGE_DESCRIPTION, NUTRITION_ANALYSIS_PROMPT};
use nutriscan::config::{AnalyzerConfig, NutritionConfig};
use nutriscan::errors::{AppError, AppResult, ErrorCode};
use nutriscan::models::{FoodLogEntry, Goal, MealType};
use nutriscan::services::{FoodImageAnalyzer, NutritionService};
use tokio::time::sleep;

mod common;

/// Returns a canned response, counts calls, and records descriptions
struct StaticAnalyzer {
    response: String,
    calls: AtomicUsize,
    descriptions: Mutex<Vec<String>>,
}

impl StaticAnalyzer {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_owned(),
            calls: AtomicUsize::new(0),
            descriptions: Mutex::new(Vec::new()),
        }
    }

    fn last_description(&self) -> Option<String> {
        self.descriptions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl FoodImageAnalyzer for StaticAnalyzer {
    async fn analyze(
        &self,
        prompt: &str,
        description: &str,
        image: &ImagePart,
    ) -> AppResult<String> {
        assert_eq!(prompt, NUTRITION_ANALYSIS_PROMPT);
        assert!(!image.data.is_empty());
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.descriptions.lock().unwrap().push(description.to_owned());
        Ok(self.response.clone())
    }
}

struct FailingAnalyzer;

#[async_trait]
impl FoodImageAnalyzer for FailingAnalyzer {
    fn name(&self) -> &'static str {
        "vision-test"
    }

    async fn analyze(
        &self,
        _prompt: &str,
        _description: &str,
        _image: &ImagePart,
    ) -> AppResult<String> {
        Err(AppError::new(ErrorCode::ExternalServiceError, "quota exhausted"))
    }
}

struct SlowAnalyzer;

#[async_trait]
impl FoodImageAnalyzer for SlowAnalyzer {
    async fn analyze(
        &self,
        _prompt: &str,
        _description: &str,
        _image: &ImagePart,
    ) -> AppResult<String> {
        sleep(Duration::from_secs(120)).await;
        Ok(String::new())
    }
}

fn jpeg() -> ImagePart {
    ImagePart::new("image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap()
}

fn service_with(analyzer: Arc<dyn FoodImageAnalyzer>, timeout_secs: u64) -> NutritionService {
    NutritionService::new(
        analyzer,
        NutritionConfig::default(),
        &AnalyzerConfig {
            timeout_secs,
            ..AnalyzerConfig::default()
        },
    )
}

#[tokio::test]
async fn test_analyze_image_parses_response() {
    common::init_test_logging();
    let analyzer = Arc::new(StaticAnalyzer::new(common::GRILLED_CHICKEN_RESPONSE));
    let service = service_with(analyzer.clone(), 60);

    let analysis = service.analyze_image(&jpeg(), None, None, None).await.unwrap();

    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(analysis.raw_response, common::GRILLED_CHICKEN_RESPONSE);
    assert_eq!(analysis.result.food_items.len(), 2);
    assert_eq!(analysis.result.health_tips.len(), 1);
    assert!(analysis.result.warnings.is_empty());
}

#[tokio::test]
async fn test_analyze_image_derives_warnings_with_profile() {
    let raw = common::total_line(900, 10, 30, 20);
    let service = service_with(Arc::new(StaticAnalyzer::new(&raw)), 60);
    let profile = common::reference_profile(Goal::Cutting);
    let targets = common::sample_targets();

    let analysis = service
        .analyze_image(&jpeg(), None, Some(&profile), Some(&targets))
        .await
        .unwrap();

    assert_eq!(analysis.result.warnings.len(), 3);
}

#[tokio::test]
async fn test_user_description_reaches_analyzer() {
    let analyzer = Arc::new(StaticAnalyzer::new(common::GRILLED_CHICKEN_RESPONSE));
    let service = service_with(analyzer.clone(), 60);

    service
        .analyze_image(&jpeg(), Some("  Chicken with rice  "), None, None)
        .await
        .unwrap();
    assert_eq!(
        analyzer.last_description().as_deref(),
        Some("Chicken with rice")
    );

    service.analyze_image(&jpeg(), None, None, None).await.unwrap();
    assert_eq!(
        analyzer.last_description().as_deref(),
        Some(DEFAULT_IMAGE_DESCRIPTION)
    );

    service
        .analyze_image(&jpeg(), Some("   "), None, None)
        .await
        .unwrap();
    assert_eq!(
        analyzer.last_description().as_deref(),
        Some("Food items in the image")
    );
}

#[tokio::test]
async fn test_empty_image_is_rejected_before_calling_analyzer() {
    let analyzer = Arc::new(StaticAnalyzer::new("unused"));
    let service = service_with(analyzer.clone(), 60);
    let empty = ImagePart {
        mime_type: "image/png".to_owned(),
        data: Vec::new(),
    };

    let error = service.analyze_image(&empty, None, None, None).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(analyzer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyzer_failure_maps_to_external_service_error() {
    let service = service_with(Arc::new(FailingAnalyzer), 60);

    let error = service.analyze_image(&jpeg(), None, None, None).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.source().is_some());
    assert!(error.message.contains("vision-test"));
    assert!(error.message.contains("quota exhausted"));
}

#[tokio::test(start_paused = true)]
async fn test_slow_analyzer_times_out() {
    let service = service_with(Arc::new(SlowAnalyzer), 5);

    let error = service.analyze_image(&jpeg(), None, None, None).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.message.contains("5s"));
}

#[tokio::test]
async fn test_unparseable_response_yields_empty_result() {
    let service = service_with(
        Arc::new(StaticAnalyzer::new("I could not identify any food.")),
        60,
    );

    let analysis = service.analyze_image(&jpeg(), None, None, None).await.unwrap();
    assert!(!analysis.result.has_food_items());
}

#[test]
fn test_compute_targets_validates_profile() {
    let service = service_with(Arc::new(FailingAnalyzer), 60);

    let targets = service
        .compute_targets(&common::reference_profile(Goal::Bulking))
        .unwrap();
    assert!((targets.target_calories - 2276.0).abs() < f64::EPSILON);

    let mut too_young = common::reference_profile(Goal::Bulking);
    too_young.age_years = 12;
    let error = service.compute_targets(&too_young).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_analyze_text_and_summarize_day() {
    let service = service_with(Arc::new(FailingAnalyzer), 60);
    let result = service.analyze_text(common::MIXED_PLATE_RESPONSE, None, None);
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let entries: Vec<FoodLogEntry> = result
        .itemized()
        .map(|item| FoodLogEntry::from_food_item(item, MealType::Dinner, date))
        .collect();
    let summary = service.summarize_day(date, &entries, &[]);

    // Sum of itemized foods, not the declared Total
    assert_eq!(summary.total_calories, 637);
    assert_eq!(summary.total_protein_g, 48);
}

#[test]
fn test_with_defaults_uses_global_config() {
    let service = NutritionService::with_defaults(Arc::new(FailingAnalyzer));
    assert!(service.config().validate().is_ok());
}
