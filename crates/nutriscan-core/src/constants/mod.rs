// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for nutrition math, the analysis wire format, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Energy density of macronutrients
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Tokens of the three-section analysis response format
pub mod analysis_format {
    /// Separator between nutrition, portion, and tip sections
    pub const SECTION_DELIMITER: &str = "---";
    /// Leading keyword of the aggregate nutrition line
    pub const TOTAL_KEYWORD: &str = "Total";
    /// Prefix marking a comment line in the portion and tip sections
    pub const COMMENT_PREFIX: char = '#';
    /// Portion used when a food line carries no `Portion:` field
    pub const DEFAULT_PORTION: &str = "Standard serving";
    /// Portion assigned to the aggregate Total item
    pub const TOTAL_PORTION: &str = "Combined total";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const NUTRISCAN: &str = "nutriscan";
    /// Name used when reporting failures of the image analysis collaborator
    pub const IMAGE_ANALYZER: &str = "image-analyzer";
}
