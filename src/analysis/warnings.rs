// ABOUTME: Personalized meal warnings comparing a parsed Total against daily health targets
// ABOUTME: Independent rules for calories, protein, fat when cutting, and carbs when bulking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan_core::models::{FoodItem, Goal, HealthTargets, Profile};
use nutriscan_intelligence::config::WarningThresholdsConfig;
use tracing::debug;

use super::parser::ParsedNutrition;

/// A stored target of zero or less counts as missing
fn present(target: f64) -> Option<f64> {
    (target > 0.0).then_some(target)
}

fn over_calorie_warning(total: &FoodItem, target_calories: f64, fraction: f64) -> Option<String> {
    (f64::from(total.calories) > target_calories * fraction).then(|| {
        format!(
            "⚠️ This meal contains {} calories, which is over {:.0}% of your daily target ({:.0} calories).",
            total.calories,
            fraction * 100.0,
            target_calories
        )
    })
}

fn low_protein_warning(total: &FoodItem, protein_target: f64, fraction: f64) -> Option<String> {
    (f64::from(total.protein_g) < protein_target * fraction).then(|| {
        format!(
            "⚠️ This meal is relatively low in protein. Consider adding protein-rich foods to meet your daily target of {protein_target:.0}g."
        )
    })
}

fn high_fat_for_cutting_warning(total: &FoodItem, fat_target: f64, fraction: f64) -> Option<String> {
    (f64::from(total.fat_g) > fat_target * fraction).then(|| {
        "⚠️ This meal is high in fat, which may affect your cutting goals. Consider lower-fat alternatives."
            .to_owned()
    })
}

fn low_carb_for_bulking_warning(total: &FoodItem, carbs_target: f64, fraction: f64) -> Option<String> {
    (f64::from(total.carbs_g) < carbs_target * fraction).then(|| {
        "⚠️ This meal is relatively low in carbohydrates, which may not support your bulking goals effectively."
            .to_owned()
    })
}

/// Derive advisory messages for one analyzed meal
///
/// Requires both a profile and targets, and a Total item in the parse;
/// otherwise no warnings are produced. Rules are evaluated in a fixed order
/// and each one that triggers adds its message.
#[must_use]
pub fn derive_health_warnings(
    parsed: &ParsedNutrition,
    profile: Option<&Profile>,
    targets: Option<&HealthTargets>,
    thresholds: &WarningThresholdsConfig,
) -> Vec<String> {
    let (Some(profile), Some(targets)) = (profile, targets) else {
        return Vec::new();
    };
    let Some(total) = parsed.total() else {
        return Vec::new();
    };

    let mut warnings = Vec::new();

    if let Some(target_calories) = present(targets.target_calories) {
        warnings.extend(over_calorie_warning(
            total,
            target_calories,
            thresholds.meal_calories_max_fraction,
        ));
    }

    if let Some(protein_target) = present(targets.protein_g) {
        warnings.extend(low_protein_warning(
            total,
            protein_target,
            thresholds.meal_protein_min_fraction,
        ));
    }

    match profile.goal {
        Goal::Cutting => {
            let fat_target = present(targets.fat_g).unwrap_or(thresholds.default_fat_target_g);
            warnings.extend(high_fat_for_cutting_warning(
                total,
                fat_target,
                thresholds.cutting_fat_max_fraction,
            ));
        }
        Goal::Bulking => {
            let carbs_target =
                present(targets.carbs_g).unwrap_or(thresholds.default_carbs_target_g);
            warnings.extend(low_carb_for_bulking_warning(
                total,
                carbs_target,
                thresholds.bulking_carbs_min_fraction,
            ));
        }
        Goal::Maintaining => {}
    }

    debug!(
        count = warnings.len(),
        goal = profile.goal.as_str(),
        "Derived meal warnings"
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_target_is_missing() {
        assert_eq!(present(0.0), None);
        assert_eq!(present(-5.0), None);
        assert_eq!(present(120.0), Some(120.0));
    }

    #[test]
    fn test_over_calorie_message_cites_both_numbers() {
        let total = FoodItem::total(900, 40, 20, 80);
        let message = over_calorie_warning(&total, 2000.0, 0.4);
        assert_eq!(
            message.as_deref(),
            Some("⚠️ This meal contains 900 calories, which is over 40% of your daily target (2000 calories).")
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let total = FoodItem::total(800, 40, 20, 80);
        assert!(over_calorie_warning(&total, 2000.0, 0.4).is_none());
    }
}
