// ABOUTME: Integration tests for personalized meal warnings
// ABOUTME: Checks each rule, strict thresholds, default targets, and rule ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan::analysis::{analyze_nutrition_text_with, derive_health_warnings, parse_nutrition_response};
use nutriscan::config::WarningThresholdsConfig;
use nutriscan::models::{Goal, HealthTargets};

mod common;

const OVER_CALORIES_900: &str = "⚠️ This meal contains 900 calories, which is over 40% of your daily target (2000 calories).";
const LOW_PROTEIN: &str = "⚠️ This meal is relatively low in protein. Consider adding protein-rich foods to meet your daily target of 150g.";
const HIGH_FAT_CUTTING: &str = "⚠️ This meal is high in fat, which may affect your cutting goals. Consider lower-fat alternatives.";
const LOW_CARBS_BULKING: &str = "⚠️ This meal is relatively low in carbohydrates, which may not support your bulking goals effectively.";

fn warnings_for(goal: Goal, total: &str, targets: &HealthTargets) -> Vec<String> {
    analyze_nutrition_text_with(
        total,
        Some(&common::reference_profile(goal)),
        Some(targets),
        &WarningThresholdsConfig::default(),
    )
    .warnings
}

#[test]
fn test_over_calorie_warning_only() {
    common::init_test_logging();
    let warnings = warnings_for(
        Goal::Maintaining,
        &common::total_line(900, 40, 20, 50),
        &common::sample_targets(),
    );
    assert_eq!(warnings, vec![OVER_CALORIES_900]);
}

#[test]
fn test_calorie_threshold_is_strict() {
    let targets = common::sample_targets();
    assert!(warnings_for(Goal::Maintaining, &common::total_line(800, 40, 20, 50), &targets).is_empty());
    assert_eq!(
        warnings_for(Goal::Maintaining, &common::total_line(801, 40, 20, 50), &targets).len(),
        1
    );
}

#[test]
fn test_low_protein_warning() {
    let warnings = warnings_for(
        Goal::Maintaining,
        &common::total_line(500, 10, 20, 50),
        &common::sample_targets(),
    );
    assert_eq!(warnings, vec![LOW_PROTEIN]);
}

#[test]
fn test_high_fat_warning_only_when_cutting() {
    let targets = common::sample_targets();
    let meal = common::total_line(500, 40, 30, 50);

    assert_eq!(warnings_for(Goal::Cutting, &meal, &targets), vec![HIGH_FAT_CUTTING]);
    assert!(warnings_for(Goal::Maintaining, &meal, &targets).is_empty());
    assert!(warnings_for(Goal::Bulking, &meal, &targets).is_empty());
}

#[test]
fn test_low_carb_warning_only_when_bulking() {
    let targets = common::sample_targets();
    let meal = common::total_line(500, 40, 20, 30);

    assert_eq!(warnings_for(Goal::Bulking, &meal, &targets), vec![LOW_CARBS_BULKING]);
    assert!(warnings_for(Goal::Cutting, &meal, &targets).is_empty());
}

#[test]
fn test_rules_fire_in_fixed_order() {
    let warnings = warnings_for(
        Goal::Cutting,
        &common::total_line(900, 10, 30, 20),
        &common::sample_targets(),
    );
    assert_eq!(warnings, vec![OVER_CALORIES_900, LOW_PROTEIN, HIGH_FAT_CUTTING]);
}

#[test]
fn test_missing_fat_target_uses_default() {
    let targets = HealthTargets {
        fat_g: 0.0,
        ..common::sample_targets()
    };

    // 65g default * 0.4 = 26g
    assert_eq!(
        warnings_for(Goal::Cutting, &common::total_line(500, 40, 27, 50), &targets),
        vec![HIGH_FAT_CUTTING]
    );
    assert!(warnings_for(Goal::Cutting, &common::total_line(500, 40, 26, 50), &targets).is_empty());
}

#[test]
fn test_missing_carbs_target_uses_default() {
    let targets = HealthTargets {
        carbs_g: 0.0,
        ..common::sample_targets()
    };

    // 300g default * 0.2 = 60g
    assert_eq!(
        warnings_for(Goal::Bulking, &common::total_line(500, 40, 20, 59), &targets),
        vec![LOW_CARBS_BULKING]
    );
    assert!(warnings_for(Goal::Bulking, &common::total_line(500, 40, 20, 60), &targets).is_empty());
}

#[test]
fn test_missing_calorie_and_protein_targets_skip_rules() {
    let targets = HealthTargets {
        target_calories: 0.0,
        protein_g: 0.0,
        ..common::sample_targets()
    };
    let warnings = warnings_for(Goal::Maintaining, &common::total_line(5000, 0, 20, 50), &targets);
    assert!(warnings.is_empty());
}

#[test]
fn test_no_warnings_without_profile_or_targets() {
    let parsed = parse_nutrition_response(&common::total_line(900, 10, 30, 20));
    let thresholds = WarningThresholdsConfig::default();
    let profile = common::reference_profile(Goal::Cutting);
    let targets = common::sample_targets();

    assert!(derive_health_warnings(&parsed, None, Some(&targets), &thresholds).is_empty());
    assert!(derive_health_warnings(&parsed, Some(&profile), None, &thresholds).is_empty());
    assert!(derive_health_warnings(&parsed, None, None, &thresholds).is_empty());
}

#[test]
fn test_no_warnings_without_total_line() {
    let raw = "1. Pizza - Calories: 1200 kcal, Protein: 10g, Fat: 60g, Carbs: 130g";
    let warnings = warnings_for(Goal::Cutting, raw, &common::sample_targets());
    assert!(warnings.is_empty());
}

#[test]
fn test_custom_threshold_appears_in_message() {
    let thresholds = WarningThresholdsConfig {
        meal_calories_max_fraction: 0.25,
        ..WarningThresholdsConfig::default()
    };
    let result = analyze_nutrition_text_with(
        &common::total_line(600, 40, 20, 50),
        Some(&common::reference_profile(Goal::Maintaining)),
        Some(&common::sample_targets()),
        &thresholds,
    );

    assert_eq!(
        result.warnings,
        vec!["⚠️ This meal contains 600 calories, which is over 25% of your daily target (2000 calories)."]
    );
}

#[test]
fn test_warnings_attach_to_full_response() {
    let result = analyze_nutrition_text_with(
        common::MIXED_PLATE_RESPONSE,
        Some(&common::reference_profile(Goal::Bulking)),
        Some(&common::sample_targets()),
        &WarningThresholdsConfig::default(),
    );

    // 637 kcal < 800, 48g protein >= 22.5g, 56g carbs >= 35g
    assert!(result.warnings.is_empty());
    assert_eq!(result.health_tips.len(), 3);
}
