// ABOUTME: Health metrics engine turning a body profile into energy and macronutrient targets
// ABOUTME: BMI, BMI category, BMR, TDEE, goal-adjusted calories, and macronutrient split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Calculator Module
//!
//! Pure, deterministic functions composed in a fixed order:
//! BMI → BMR → TDEE → target calories → macronutrients.
//! Each step consumes only the profile and previously computed values.
//!
//! Rounding is half-to-even on the exact value of each intermediate result.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use nutriscan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutriscan_core::models::{
    ActivityLevel, BmiCategory, Gender, Goal, HealthTargets, Profile,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, GoalAdjustmentConfig,
    MacroSplitConfig, NutritionConfig,
};

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacronutrientTargets {
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
}

fn round_to_integer(value: f64) -> f64 {
    value.round_ties_even()
}

/// One decimal place, rounded on the exact decimal expansion of `value`
///
/// `(value * 10.0).round()` is not equivalent: the multiply can turn
/// 24.9499… into the tie 249.5.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)², rounded to one decimal place.
///
/// No bounds check: a zero height yields an infinite (or NaN) result. Callers
/// validate profiles before computing.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

/// Classify a BMI value
///
/// Band edges belong to the higher band: 18.5 is normal, 25.0 is overweight.
#[must_use]
pub fn bmi_category(bmi: f64, thresholds: &BmiThresholdsConfig) -> BmiCategory {
    if bmi < thresholds.underweight_below {
        BmiCategory::Underweight
    } else if bmi < thresholds.normal_below {
        BmiCategory::Normal
    } else if bmi < thresholds.overweight_below {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Result is rounded to the nearest kcal.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    round_to_integer(weight_component + height_component + age_component + gender_constant)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor, rounded to the nearest kcal.
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Lightly active: 1.375
/// - Moderately active: 1.55
/// - Very active: 1.725
/// - Extra active: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    round_to_integer(bmr * activity_factor)
}

/// Calculate the daily calorie target for a goal
///
/// Bulking adds 15%, cutting removes 20%, maintaining keeps TDEE.
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    let multiplier = match goal {
        Goal::Bulking => config.bulking_multiplier,
        Goal::Cutting => config.cutting_multiplier,
        Goal::Maintaining => config.maintaining_multiplier,
    };

    round_to_integer(tdee * multiplier)
}

/// Split a calorie target into macronutrient grams
///
/// Each gram amount is rounded independently, so the three may not re-sum to
/// exactly `target_calories`.
#[must_use]
pub fn calculate_macronutrients(
    target_calories: f64,
    goal: Goal,
    config: &MacroSplitConfig,
) -> MacronutrientTargets {
    let split = config.for_goal(goal);
    let share = |pct: u8| target_calories * (f64::from(pct) / 100.0);

    MacronutrientTargets {
        protein_g: round_to_integer(share(split.protein_pct) / KCAL_PER_GRAM_PROTEIN),
        fat_g: round_to_integer(share(split.fat_pct) / KCAL_PER_GRAM_FAT),
        carbs_g: round_to_integer(share(split.carbs_pct) / KCAL_PER_GRAM_CARBS),
    }
}

/// Compute the complete set of health targets for a profile
///
/// Never fails; the profile is assumed to be validated by the caller.
#[must_use]
pub fn compute_health_targets(profile: &Profile, config: &NutritionConfig) -> HealthTargets {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target_calories = calculate_target_calories(tdee, profile.goal, &config.goal_adjustments);
    let macros = calculate_macronutrients(target_calories, profile.goal, &config.macro_splits);

    debug!(
        bmi,
        bmr,
        tdee,
        target_calories,
        goal = profile.goal.as_str(),
        activity_level = profile.activity_level.as_str(),
        "Computed health targets"
    );

    HealthTargets {
        bmi,
        bmr,
        tdee,
        target_calories,
        protein_g: macros.protein_g,
        fat_g: macros.fat_g,
        carbs_g: macros.carbs_g,
    }
}

/// Compute health targets for many profiles in parallel
///
/// Output order matches input order.
#[must_use]
pub fn compute_health_targets_batch(
    profiles: &[Profile],
    config: &NutritionConfig,
) -> Vec<HealthTargets> {
    profiles
        .par_iter()
        .map(|profile| compute_health_targets(profile, config))
        .collect()
}
