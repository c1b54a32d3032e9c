// ABOUTME: Food and exercise log entries recorded by users throughout the day
// ABOUTME: MealType, FoodLogEntry, and ExerciseLogEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::FoodItem;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string; unknown values are logged as snacks
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// A food consumption record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodLogEntry {
    /// Food name
    pub food_name: String,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Portion description
    pub portion_size: String,
    /// Meal the food belongs to
    pub meal_type: MealType,
    /// Day the food was consumed
    pub consumed_on: NaiveDate,
}

impl FoodLogEntry {
    /// Create a log entry from a parsed food item
    #[must_use]
    pub fn from_food_item(item: &FoodItem, meal_type: MealType, consumed_on: NaiveDate) -> Self {
        Self {
            food_name: item.name.clone(),
            calories: item.calories,
            protein_g: item.protein_g,
            fat_g: item.fat_g,
            carbs_g: item.carbs_g,
            portion_size: item.portion_size.clone(),
            meal_type,
            consumed_on,
        }
    }
}

/// An exercise session record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseLogEntry {
    /// Exercise name
    pub exercise_name: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Energy burned (kcal)
    pub calories_burned: u32,
    /// Day the exercise was performed
    pub performed_on: NaiveDate,
}
