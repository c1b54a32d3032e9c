// ABOUTME: Body profile, goal, and activity models consumed by the health metrics engine
// ABOUTME: Profile, Gender, Goal, ActivityLevel, ProfileLimits, HealthTargets, BmiCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Biological sex used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Parse gender from string, case-insensitively
    ///
    /// Anything other than "male" is treated as female.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Declared body composition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric surplus for muscle gain
    Bulking,
    /// Caloric deficit for fat loss
    Cutting,
    /// Caloric balance
    Maintaining,
}

impl Goal {
    /// Parse goal from string, case-insensitively
    ///
    /// Unrecognized goals fall back to [`Goal::Maintaining`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "bulking" => Self::Bulking,
            "cutting" => Self::Cutting,
            _ => Self::Maintaining,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bulking => "Bulking",
            Self::Cutting => "Cutting",
            Self::Maintaining => "Maintaining",
        }
    }
}

/// Habitual activity level used for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job, or training twice a day
    ExtraActive,
}

impl ActivityLevel {
    /// Parse activity level from its stored key (`lightly_active`, ...)
    ///
    /// Matching ignores case and accepts spaces or hyphens in place of
    /// underscores. Unrecognized values fall back to [`ActivityLevel::Sedentary`].
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "lightly_active" => Self::LightlyActive,
            "moderately_active" => Self::ModeratelyActive,
            "very_active" => Self::VeryActive,
            "extra_active" => Self::ExtraActive,
            _ => Self::Sedentary,
        }
    }

    /// Stored key for this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        }
    }

    /// Human-readable description shown when picking a level
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::LightlyActive => "Lightly active (light exercise/sports 1-3 days/week)",
            Self::ModeratelyActive => "Moderately active (moderate exercise/sports 3-5 days/week)",
            Self::VeryActive => "Very active (hard exercise/sports 6-7 days/week)",
            Self::ExtraActive => {
                "Extra active (very hard exercise & physical job or training twice a day)"
            }
        }
    }
}

/// Body measurements and goals of one user
///
/// Immutable input to the metrics engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex for BMR
    pub gender: Gender,
    /// Body composition goal
    pub goal: Goal,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
}

/// Accepted input ranges for profile measurements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProfileLimits {
    /// Minimum weight (kg)
    pub min_weight_kg: f64,
    /// Maximum weight (kg)
    pub max_weight_kg: f64,
    /// Minimum height (cm)
    pub min_height_cm: f64,
    /// Maximum height (cm)
    pub max_height_cm: f64,
    /// Minimum age (years)
    pub min_age_years: u32,
    /// Maximum age (years)
    pub max_age_years: u32,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            min_weight_kg: 30.0,
            max_weight_kg: 250.0,
            min_height_cm: 100.0,
            max_height_cm: 250.0,
            min_age_years: 18,
            max_age_years: 100,
        }
    }
}

impl Profile {
    /// Check measurements against the accepted ranges
    ///
    /// The metrics engine never calls this; it is the caller's contract to
    /// validate before computing targets.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first field outside its range
    pub fn validate(&self, limits: &ProfileLimits) -> AppResult<()> {
        if !(limits.min_weight_kg..=limits.max_weight_kg).contains(&self.weight_kg) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                self.weight_kg,
                limits.min_weight_kg,
                limits.max_weight_kg,
            ));
        }
        if !(limits.min_height_cm..=limits.max_height_cm).contains(&self.height_cm) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                self.height_cm,
                limits.min_height_cm,
                limits.max_height_cm,
            ));
        }
        if !(limits.min_age_years..=limits.max_age_years).contains(&self.age_years) {
            return Err(AppError::value_out_of_range(
                "age_years",
                f64::from(self.age_years),
                f64::from(limits.min_age_years),
                f64::from(limits.max_age_years),
            ));
        }
        Ok(())
    }
}

/// BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    Normal,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Energy and macronutrient targets derived from a [`Profile`]
///
/// Recomputed from scratch on every metrics request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthTargets {
    /// Body Mass Index (1 decimal place)
    pub bmi: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target after goal adjustment (kcal/day)
    pub target_calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight_kg: f64, height_cm: f64, age_years: u32) -> Profile {
        Profile {
            weight_kg,
            height_cm,
            age_years,
            gender: Gender::Male,
            goal: Goal::Maintaining,
            activity_level: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_lossy_enum_parsing() {
        assert_eq!(Gender::from_str_lossy("MALE"), Gender::Male);
        assert_eq!(Gender::from_str_lossy("other"), Gender::Female);
        assert_eq!(Goal::from_str_lossy("Cutting"), Goal::Cutting);
        assert_eq!(Goal::from_str_lossy("recomp"), Goal::Maintaining);
        assert_eq!(
            ActivityLevel::from_str_lossy("Very Active"),
            ActivityLevel::VeryActive
        );
        assert_eq!(
            ActivityLevel::from_str_lossy("unknown_value"),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn test_validate_boundaries_are_inclusive() {
        let limits = ProfileLimits::default();
        assert!(profile(30.0, 100.0, 18).validate(&limits).is_ok());
        assert!(profile(250.0, 250.0, 100).validate(&limits).is_ok());
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let limits = ProfileLimits::default();
        let err = profile(29.9, 170.0, 30).validate(&limits).unwrap_err();
        assert_eq!(err.details["field"], "weight_kg");

        let err = profile(70.0, 170.0, 17).validate(&limits).unwrap_err();
        assert_eq!(err.details["field"], "age_years");
    }
}
