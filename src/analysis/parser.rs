// ABOUTME: Line-classifier state machine for three-section nutrition analysis responses
// ABOUTME: Extracts food items, the declared Total, portion annotations, and health tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition response parser
//!
//! The response is read as a sequence of sections separated by `---`:
//!
//! ```text
//! 1. Grilled Chicken - Calories: 250 kcal, Protein: 40g, Fat: 8g, Carbs: 0g, Portion: 150 grams
//! Total - Calories: 250 kcal, Protein: 40g, Fat: 8g, Carbs: 0g
//! ---
//! Grilled Chicken: about the size of a deck of cards
//! ---
//! Great lean protein choice.
//! ```
//!
//! Parsing never fails. Lines that match no grammar of their section are
//! dropped, and missing sections leave their part of the result empty.

use nutriscan_core::constants::analysis_format::{
    COMMENT_PREFIX, SECTION_DELIMITER, TOTAL_KEYWORD,
};
use nutriscan_core::models::{AnalysisResult, FoodItem, PortionAnnotations};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Section currently being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Numbered food lines and the Total line
    Nutrition,
    /// `Food Name: portion` annotations
    Portions,
    /// Free-text health tips
    Tips,
    /// Anything after the third section is ignored
    Done,
}

impl ParseState {
    /// State entered after crossing a section delimiter
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Nutrition => Self::Portions,
            Self::Portions => Self::Tips,
            Self::Tips | Self::Done => Self::Done,
        }
    }
}

/// Parsed response before warnings are attached
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedNutrition {
    /// Food items in order of appearance, with at most one Total
    pub food_items: Vec<FoodItem>,
    /// Portion annotations keyed by food name
    pub portion_info: PortionAnnotations,
    /// Health tips in order of appearance
    pub health_tips: Vec<String>,
}

impl ParsedNutrition {
    /// The declared Total item
    #[must_use]
    pub fn total(&self) -> Option<&FoodItem> {
        self.food_items.iter().find(|item| item.is_total)
    }

    /// Attach warnings and produce the final result
    #[must_use]
    pub fn into_result(self, warnings: Vec<String>) -> AnalysisResult {
        AnalysisResult {
            food_items: self.food_items,
            portion_info: self.portion_info,
            health_tips: self.health_tips,
            warnings,
        }
    }

    fn push_food_item(&mut self, item: FoodItem) {
        if item.is_total && self.total().is_some() {
            debug!(calories = item.calories, "Ignoring repeated Total line");
            return;
        }
        self.food_items.push(item);
    }

    fn annotate_portion(&mut self, food: String, portion: String) {
        let key = food.to_lowercase();
        for item in &mut self.food_items {
            if item.name.to_lowercase() == key {
                item.portion_size.clone_from(&portion);
            }
        }
        self.portion_info.insert(food, portion);
    }
}

/// Cursor over one line for the fixed-format nutrition grammar
struct LineCursor<'a> {
    rest: &'a str,
}

impl<'a> LineCursor<'a> {
    const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn literal(&mut self, token: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(token)?;
        Some(())
    }

    /// One or more whitespace characters
    fn whitespace(&mut self) -> Option<()> {
        let trimmed = self.rest.trim_start();
        if trimmed.len() == self.rest.len() {
            return None;
        }
        self.rest = trimmed;
        Some(())
    }

    fn digits(&mut self) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(digits)
    }

    /// Unsigned integer; values beyond `u32` reject the line
    fn number(&mut self) -> Option<u32> {
        self.digits()?.parse().ok()
    }

    /// `<label>\s+<int>g`, preceded by whitespace
    fn gram_field(&mut self, label: &str) -> Option<u32> {
        self.whitespace()?;
        self.literal(label)?;
        self.whitespace()?;
        let grams = self.number()?;
        self.literal("g")?;
        Some(grams)
    }

    const fn remainder(&self) -> &'a str {
        self.rest
    }
}

/// Calories and macronutrients shared by food and Total lines
struct MacroFields {
    calories: u32,
    protein_g: u32,
    fat_g: u32,
    carbs_g: u32,
}

/// `Calories: <int> kcal, Protein: <int>g, Fat: <int>g, Carbs: <int>g`
fn macro_fields(cursor: &mut LineCursor<'_>) -> Option<MacroFields> {
    cursor.literal("Calories:")?;
    cursor.whitespace()?;
    let calories = cursor.number()?;
    cursor.whitespace()?;
    cursor.literal("kcal,")?;
    let protein_g = cursor.gram_field("Protein:")?;
    cursor.literal(",")?;
    let fat_g = cursor.gram_field("Fat:")?;
    cursor.literal(",")?;
    let carbs_g = cursor.gram_field("Carbs:")?;

    Some(MacroFields {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    })
}

/// Name in front of `\s+-\s+`, given everything before `Calories:`
fn food_name(prefix: &str) -> Option<&str> {
    let before_gap = prefix.trim_end();
    if before_gap.len() == prefix.len() {
        return None;
    }
    let before_dash = before_gap.strip_suffix('-')?;
    let name = before_dash.trim_end();
    if name.len() == before_dash.len() {
        return None;
    }
    Some(name.trim())
}

/// End of line, or `, Portion: <text>` up to end of line
///
/// The outer `Option` is the match; the inner one is the portion text.
fn portion_suffix(mut cursor: LineCursor<'_>) -> Option<Option<String>> {
    if cursor.remainder().is_empty() {
        return Some(None);
    }
    cursor.literal(",")?;
    cursor.whitespace()?;
    cursor.literal("Portion:")?;

    let text = cursor.remainder();
    if !text.is_empty() && !text.starts_with(char::is_whitespace) {
        return None;
    }
    let portion = text.trim();
    Some((!portion.is_empty()).then(|| portion.to_owned()))
}

/// `N. <name> - <macro fields>[, Portion: <text>]`
fn numbered_food_line(line: &str) -> Option<FoodItem> {
    let mut cursor = LineCursor::new(line);
    cursor.digits()?;
    cursor.literal(".")?;
    cursor.whitespace()?;
    let body = cursor.remainder();

    // The name is the shortest prefix after which the rest of the line matches
    body.match_indices("Calories:").find_map(|(offset, _)| {
        let name = food_name(&body[..offset])?;
        let mut tail = LineCursor::new(&body[offset..]);
        let fields = macro_fields(&mut tail)?;
        let portion = portion_suffix(tail)?;
        Some(FoodItem::itemized(
            name,
            fields.calories,
            fields.protein_g,
            fields.fat_g,
            fields.carbs_g,
            portion,
        ))
    })
}

/// `Total - <macro fields>`; trailing text is tolerated
fn total_line(line: &str) -> Option<FoodItem> {
    let mut cursor = LineCursor::new(line);
    cursor.literal(TOTAL_KEYWORD)?;
    cursor.whitespace()?;
    cursor.literal("-")?;
    cursor.whitespace()?;
    let fields = macro_fields(&mut cursor)?;

    Some(FoodItem::total(
        fields.calories,
        fields.protein_g,
        fields.fat_g,
        fields.carbs_g,
    ))
}

/// Classify one nutrition-section line
///
/// Tries the numbered food grammar first, then the Total grammar. Returns
/// `None` for anything else.
#[must_use]
pub fn classify_nutrition_line(line: &str) -> Option<FoodItem> {
    let line = line.trim();
    numbered_food_line(line).or_else(|| total_line(line))
}

fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Parse a portion-section line into `(food name, portion text)`
///
/// Splits on the first colon; both sides are trimmed. Comment lines and
/// lines without a colon yield `None`.
#[must_use]
pub fn parse_portion_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if is_comment(line) {
        return None;
    }
    let (food, portion) = line.split_once(':')?;
    Some((food.trim().to_owned(), portion.trim().to_owned()))
}

/// Parse a tip-section line; blank and comment lines yield `None`
#[must_use]
pub fn parse_tip_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return None;
    }
    Some(line.to_owned())
}

/// Parse a raw analysis response
///
/// Total over all inputs: the empty string yields an empty result.
#[must_use]
pub fn parse_nutrition_response(raw: &str) -> ParsedNutrition {
    let mut parsed = ParsedNutrition::default();
    let mut state = ParseState::Nutrition;

    for section in raw.split(SECTION_DELIMITER) {
        if state == ParseState::Done {
            break;
        }
        for line in section.lines() {
            match state {
                ParseState::Nutrition => {
                    if let Some(item) = classify_nutrition_line(line) {
                        parsed.push_food_item(item);
                    }
                }
                ParseState::Portions => {
                    if let Some((food, portion)) = parse_portion_line(line) {
                        parsed.annotate_portion(food, portion);
                    }
                }
                ParseState::Tips => {
                    if let Some(tip) = parse_tip_line(line) {
                        parsed.health_tips.push(tip);
                    }
                }
                ParseState::Done => {}
            }
        }
        state = state.advance();
    }

    debug!(
        food_items = parsed.food_items.len(),
        portions = parsed.portion_info.len(),
        tips = parsed.health_tips.len(),
        "Parsed nutrition response"
    );

    parsed
}
