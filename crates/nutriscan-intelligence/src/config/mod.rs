// ABOUTME: Nutrition configuration container with environment overrides and validation
// ABOUTME: Provides the process-wide read-only configuration used by the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration Module
//!
//! Environment-only configuration: defaults, then `NUTRISCAN_*` overrides,
//! then validation. The validated configuration is exposed through
//! [`NutritionConfig::global`].

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, GoalAdjustmentConfig,
    MacroDistribution, MacroSplitConfig, WarningThresholdsConfig,
};

use nutriscan_core::models::ProfileLimits;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMI classification bands
    pub bmi: BmiThresholdsConfig,
    /// Basal Metabolic Rate coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macronutrient splits per goal
    pub macro_splits: MacroSplitConfig,
    /// Meal warning thresholds
    pub warnings: WarningThresholdsConfig,
    /// Accepted profile measurement ranges
    pub profile_limits: ProfileLimits,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmi = &self.bmi;
        if bmi.underweight_below <= 0.0
            || bmi.underweight_below >= bmi.normal_below
            || bmi.normal_below >= bmi.overweight_below
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and in ascending order",
            ));
        }

        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.goal_adjustments;
        if goals.cutting_multiplier <= 0.0
            || goals.cutting_multiplier > goals.maintaining_multiplier
            || goals.maintaining_multiplier > goals.bulking_multiplier
        {
            return Err(ConfigError::InvalidRange(
                "Goal multipliers must satisfy 0 < cutting <= maintaining <= bulking",
            ));
        }

        self.macro_splits.validate()?;

        let warnings = &self.warnings;
        for fraction in [
            warnings.meal_calories_max_fraction,
            warnings.meal_protein_min_fraction,
            warnings.cutting_fat_max_fraction,
            warnings.bulking_carbs_min_fraction,
        ] {
            if fraction <= 0.0 || fraction > 1.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Warning fractions must be in (0, 1]",
                ));
            }
        }
        if warnings.default_fat_target_g <= 0.0 || warnings.default_carbs_target_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default fat and carbohydrate targets must be positive",
            ));
        }

        let limits = &self.profile_limits;
        if limits.min_weight_kg <= 0.0 || limits.min_weight_kg >= limits.max_weight_kg {
            return Err(ConfigError::InvalidRange(
                "Profile weight limits must satisfy 0 < min < max",
            ));
        }
        if limits.min_height_cm <= 0.0 || limits.min_height_cm >= limits.max_height_cm {
            return Err(ConfigError::InvalidRange(
                "Profile height limits must satisfy 0 < min < max",
            ));
        }
        if limits.min_age_years == 0 || limits.min_age_years >= limits.max_age_years {
            return Err(ConfigError::InvalidRange(
                "Profile age limits must satisfy 0 < min < max",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        Self::apply_env_var(
            "NUTRISCAN_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        // Goal adjustments
        Self::apply_env_var(
            "NUTRISCAN_BULKING_MULTIPLIER",
            &mut self.goal_adjustments.bulking_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_CUTTING_MULTIPLIER",
            &mut self.goal_adjustments.cutting_multiplier,
        )?;

        // Meal warnings
        Self::apply_env_var(
            "NUTRISCAN_WARN_MEAL_CALORIES_FRACTION",
            &mut self.warnings.meal_calories_max_fraction,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_WARN_MEAL_PROTEIN_FRACTION",
            &mut self.warnings.meal_protein_min_fraction,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_WARN_CUTTING_FAT_FRACTION",
            &mut self.warnings.cutting_fat_max_fraction,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_WARN_BULKING_CARBS_FRACTION",
            &mut self.warnings.bulking_carbs_min_fraction,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_DEFAULT_FAT_TARGET_G",
            &mut self.warnings.default_fat_target_g,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_DEFAULT_CARBS_TARGET_G",
            &mut self.warnings.default_carbs_target_g,
        )?;

        // Profile limits
        Self::apply_env_var(
            "NUTRISCAN_PROFILE_MIN_WEIGHT_KG",
            &mut self.profile_limits.min_weight_kg,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_PROFILE_MAX_WEIGHT_KG",
            &mut self.profile_limits.max_weight_kg,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_PROFILE_MIN_AGE",
            &mut self.profile_limits.min_age_years,
        )?;
        Self::apply_env_var(
            "NUTRISCAN_PROFILE_MAX_AGE",
            &mut self.profile_limits.max_age_years,
        )?;

        Ok(self)
    }
}
