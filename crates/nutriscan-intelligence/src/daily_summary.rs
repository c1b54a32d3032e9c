// ABOUTME: Daily nutrition and exercise aggregation with progress against health targets
// ABOUTME: Per-meal totals, exercise time, target progress, and net calorie delta
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use nutriscan_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutriscan_core::models::{ExerciseLogEntry, FoodLogEntry, HealthTargets, MealType};
use serde::{Deserialize, Serialize};

/// Consumption totals for one meal slot
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealTotals {
    /// Calories (kcal)
    pub calories: u64,
    /// Protein (grams)
    pub protein_g: u64,
    /// Fat (grams)
    pub fat_g: u64,
    /// Carbohydrates (grams)
    pub carbs_g: u64,
}

impl MealTotals {
    fn record(&mut self, entry: &FoodLogEntry) {
        self.calories += u64::from(entry.calories);
        self.protein_g += u64::from(entry.protein_g);
        self.fat_g += u64::from(entry.fat_g);
        self.carbs_g += u64::from(entry.carbs_g);
    }
}

/// Totals for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Calories consumed (kcal)
    pub total_calories: u64,
    /// Protein consumed (grams)
    pub total_protein_g: u64,
    /// Fat consumed (grams)
    pub total_fat_g: u64,
    /// Carbohydrates consumed (grams)
    pub total_carbs_g: u64,
    /// Totals per meal type; only meals with at least one entry appear
    pub by_meal: BTreeMap<MealType, MealTotals>,
    /// Calories burned through logged exercise (kcal)
    pub total_calories_burned: u64,
    /// Minutes of logged exercise
    pub total_exercise_minutes: u64,
    /// Consumed minus burned (kcal), may be negative
    pub net_calories: i64,
}

/// Percentage of each daily target reached, capped at 100
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyProgress {
    /// Calories, percent of target
    pub calories_percent: u32,
    /// Protein, percent of target
    pub protein_percent: u32,
    /// Fat, percent of target
    pub fat_percent: u32,
    /// Carbohydrates, percent of target
    pub carbs_percent: u32,
}

/// Calories contributed by each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroCalorieSplit {
    /// Calories from protein
    pub protein_kcal: f64,
    /// Calories from fat
    pub fat_kcal: f64,
    /// Calories from carbohydrates
    pub carbs_kcal: f64,
}

/// Aggregate the food and exercise logs of one day
///
/// Entries dated on other days are ignored.
#[must_use]
pub fn summarize_day(
    date: NaiveDate,
    food_logs: &[FoodLogEntry],
    exercise_logs: &[ExerciseLogEntry],
) -> DailySummary {
    let mut summary = DailySummary {
        date,
        total_calories: 0,
        total_protein_g: 0,
        total_fat_g: 0,
        total_carbs_g: 0,
        by_meal: BTreeMap::new(),
        total_calories_burned: 0,
        total_exercise_minutes: 0,
        net_calories: 0,
    };

    for entry in food_logs.iter().filter(|entry| entry.consumed_on == date) {
        summary.total_calories += u64::from(entry.calories);
        summary.total_protein_g += u64::from(entry.protein_g);
        summary.total_fat_g += u64::from(entry.fat_g);
        summary.total_carbs_g += u64::from(entry.carbs_g);
        summary.by_meal.entry(entry.meal_type).or_default().record(entry);
    }

    for entry in exercise_logs
        .iter()
        .filter(|entry| entry.performed_on == date)
    {
        summary.total_calories_burned += u64::from(entry.calories_burned);
        summary.total_exercise_minutes += u64::from(entry.duration_minutes);
    }

    summary.net_calories =
        to_signed(summary.total_calories) - to_signed(summary.total_calories_burned);
    summary
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Whole percent of `target` reached, truncated and capped at 100; 0 when no target
fn percent_of_target(consumed: u64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    let percent = (consumed as f64 / target * 100.0).trunc();
    percent.clamp(0.0, 100.0) as u32
}

impl DailySummary {
    /// Progress towards the user's targets
    #[must_use]
    pub fn progress(&self, targets: &HealthTargets) -> DailyProgress {
        DailyProgress {
            calories_percent: percent_of_target(self.total_calories, targets.target_calories),
            protein_percent: percent_of_target(self.total_protein_g, targets.protein_g),
            fat_percent: percent_of_target(self.total_fat_g, targets.fat_g),
            carbs_percent: percent_of_target(self.total_carbs_g, targets.carbs_g),
        }
    }

    /// Calories contributed by protein, fat, and carbohydrates
    #[must_use]
    pub fn macro_calorie_split(&self) -> MacroCalorieSplit {
        MacroCalorieSplit {
            protein_kcal: self.total_protein_g as f64 * KCAL_PER_GRAM_PROTEIN,
            fat_kcal: self.total_fat_g as f64 * KCAL_PER_GRAM_FAT,
            carbs_kcal: self.total_carbs_g as f64 * KCAL_PER_GRAM_CARBS,
        }
    }

    /// Totals for one meal type, zero when nothing was logged for it
    #[must_use]
    pub fn meal(&self, meal_type: MealType) -> MealTotals {
        self.by_meal.get(&meal_type).copied().unwrap_or_default()
    }

    /// Net calories minus the net allowance (target minus burned)
    ///
    /// Positive means the day ended over target after exercise credit.
    #[must_use]
    pub fn net_delta_from_target(&self, targets: &HealthTargets) -> f64 {
        let net_target = targets.target_calories - self.total_calories_burned as f64;
        self.net_calories as f64 - net_target
    }
}
