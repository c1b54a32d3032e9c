// ABOUTME: Nutrition configuration for health targets and meal warnings
// ABOUTME: Configures BMI bands, BMR coefficients, activity factors, goal adjustments, and macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Coefficients used by the health metrics engine and the meal warning rules.
//! Defaults reproduce the published constants; every value can be overridden
//! through `NUTRISCAN_*` environment variables (see [`super::NutritionConfig::load`]).
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - BMI bands: WHO Technical Report Series 894 (2000)

use nutriscan_core::models::Goal;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// BMI classification band upper bounds (exclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholdsConfig {
    /// Below this BMI: underweight (18.5)
    pub underweight_below: f64,
    /// Below this BMI: normal weight (25.0)
    pub normal_below: f64,
    /// Below this BMI: overweight, otherwise obese (30.0)
    pub overweight_below: f64,
}

impl Default for BmiThresholdsConfig {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            normal_below: 25.0,
            overweight_below: 30.0,
        }
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Calorie multipliers applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Bulking surplus multiplier (1.15, +15%)
    pub bulking_multiplier: f64,
    /// Cutting deficit multiplier (0.8, -20%)
    pub cutting_multiplier: f64,
    /// Maintenance multiplier (1.0)
    pub maintaining_multiplier: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            bulking_multiplier: 1.15,
            cutting_multiplier: 0.8,
            maintaining_multiplier: 1.0,
        }
    }
}

/// Share of calories from each macronutrient (percentages)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, fat_pct: u8, carbs_pct: u8) -> Self {
        debug_assert!(
            protein_pct.saturating_add(fat_pct).saturating_add(carbs_pct) == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            fat_pct,
            carbs_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total_pct(&self) -> u16 {
        self.protein_pct as u16 + self.fat_pct as u16 + self.carbs_pct as u16
    }
}

/// Macro distribution per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Bulking: 25% protein, 25% fat, 50% carbs
    pub bulking: MacroDistribution,
    /// Cutting: 35% protein, 30% fat, 35% carbs
    pub cutting: MacroDistribution,
    /// Maintaining: 30% protein, 25% fat, 45% carbs
    pub maintaining: MacroDistribution,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            bulking: MacroDistribution::new(25, 25, 50),
            cutting: MacroDistribution::new(35, 30, 35),
            maintaining: MacroDistribution::new(30, 25, 45),
        }
    }
}

impl MacroSplitConfig {
    /// Distribution for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> MacroDistribution {
        match goal {
            Goal::Bulking => self.bulking,
            Goal::Cutting => self.cutting,
            Goal::Maintaining => self.maintaining,
        }
    }

    /// Validate every distribution sums to 100%
    ///
    /// # Errors
    ///
    /// Returns an error naming the first goal whose split is off
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bulking.total_pct() != 100 {
            return Err(ConfigError::InvalidWeights(
                "bulking macro split must sum to 100%",
            ));
        }
        if self.cutting.total_pct() != 100 {
            return Err(ConfigError::InvalidWeights(
                "cutting macro split must sum to 100%",
            ));
        }
        if self.maintaining.total_pct() != 100 {
            return Err(ConfigError::InvalidWeights(
                "maintaining macro split must sum to 100%",
            ));
        }
        Ok(())
    }
}

/// Thresholds for personalized meal warnings
///
/// Fractions compare the meal's declared Total against the user's daily targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningThresholdsConfig {
    /// Warn when meal calories exceed this fraction of the daily target (0.4)
    pub meal_calories_max_fraction: f64,
    /// Warn when meal protein is below this fraction of the daily target (0.15)
    pub meal_protein_min_fraction: f64,
    /// Cutting: warn when meal fat exceeds this fraction of the fat target (0.4)
    pub cutting_fat_max_fraction: f64,
    /// Bulking: warn when meal carbs are below this fraction of the carbs target (0.2)
    pub bulking_carbs_min_fraction: f64,
    /// Fat target assumed when none is stored (65 g)
    pub default_fat_target_g: f64,
    /// Carbohydrate target assumed when none is stored (300 g)
    pub default_carbs_target_g: f64,
}

impl Default for WarningThresholdsConfig {
    fn default() -> Self {
        Self {
            meal_calories_max_fraction: 0.4,
            meal_protein_min_fraction: 0.15,
            cutting_fat_max_fraction: 0.4,
            bulking_carbs_min_fraction: 0.2,
            default_fat_target_g: 65.0,
            default_carbs_target_g: 300.0,
        }
    }
}
