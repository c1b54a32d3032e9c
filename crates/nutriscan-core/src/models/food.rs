// ABOUTME: Parsed food analysis models produced from image analysis responses
// ABOUTME: FoodItem, PortionAnnotations, and AnalysisResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::analysis_format::{DEFAULT_PORTION, TOTAL_KEYWORD, TOTAL_PORTION};

/// One food line (or the aggregate Total line) extracted from an analysis response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodItem {
    /// Food name as written by the analysis service
    pub name: String,
    /// Energy (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Free-text portion estimate
    pub portion_size: String,
    /// Whether this is the declared aggregate for the whole meal
    pub is_total: bool,
}

impl FoodItem {
    /// Itemized food entry; a missing portion becomes the standard serving
    #[must_use]
    pub fn itemized(
        name: impl Into<String>,
        calories: u32,
        protein_g: u32,
        fat_g: u32,
        carbs_g: u32,
        portion_size: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            fat_g,
            carbs_g,
            portion_size: portion_size.unwrap_or_else(|| DEFAULT_PORTION.to_owned()),
            is_total: false,
        }
    }

    /// Declared meal total, taken verbatim from the response
    #[must_use]
    pub fn total(calories: u32, protein_g: u32, fat_g: u32, carbs_g: u32) -> Self {
        Self {
            name: TOTAL_KEYWORD.to_owned(),
            calories,
            protein_g,
            fat_g,
            carbs_g,
            portion_size: TOTAL_PORTION.to_owned(),
            is_total: true,
        }
    }
}

/// Food name to portion estimate, as listed in the portion section
///
/// Keys keep their original spelling; matching against food items is
/// case-insensitive.
pub type PortionAnnotations = BTreeMap<String, String>;

/// Structured outcome of analyzing one response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Items in order of appearance, including at most one Total item
    pub food_items: Vec<FoodItem>,
    /// Portion annotations from the second section
    pub portion_info: PortionAnnotations,
    /// Health tips from the third section, in order
    pub health_tips: Vec<String>,
    /// Personalized advisory messages
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// The declared Total item, if the response had one
    #[must_use]
    pub fn total(&self) -> Option<&FoodItem> {
        self.food_items.iter().find(|item| item.is_total)
    }

    /// Itemized foods, excluding the Total
    pub fn itemized(&self) -> impl Iterator<Item = &FoodItem> {
        self.food_items.iter().filter(|item| !item.is_total)
    }

    /// Whether anything at all was detected
    #[must_use]
    pub fn has_food_items(&self) -> bool {
        !self.food_items.is_empty()
    }
}
