// ABOUTME: Runs the ingredient and nutrition rule tables and merges their flags
// ABOUTME: Never fails; empty or unmatched input yields no flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use crate::flag_rules::{INGREDIENT_RULES, NUTRITION_RULES};
use nutriscan_core::models::{HealthFlag, NutritionThresholds};
use std::collections::HashMap;

/// Flags for every ingredient rule matching `ingredients_text`
///
/// The text is lower-cased and trimmed once. Rules run in declaration order
/// and each match contributes its static flag.
#[must_use]
pub fn detect_ingredient_flags(ingredients_text: &str) -> Vec<HealthFlag> {
    let text = ingredients_text.trim().to_lowercase();
    if text.is_empty() {
        return Vec::new();
    }

    INGREDIENT_RULES
        .iter()
        .filter(|rule| rule.test(&text))
        .map(|rule| rule.flag.to_flag())
        .collect()
}

/// Flags for every nutrition threshold crossed by a per-100g snapshot
#[must_use]
pub fn detect_nutrition_flags(nutrition: &NutritionThresholds) -> Vec<HealthFlag> {
    NUTRITION_RULES
        .iter()
        .filter(|rule| (rule.test)(nutrition))
        .map(|rule| rule.flag.to_flag())
        .collect()
}

/// Ingredient flags followed by nutrition flags, deduplicated by key
///
/// On a key collision the later flag replaces the earlier one in place, so
/// the output keeps first-seen order.
#[must_use]
pub fn detect_flags(ingredients_text: &str, nutrition: &NutritionThresholds) -> Vec<HealthFlag> {
    let mut flags: Vec<HealthFlag> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for flag in detect_ingredient_flags(ingredients_text)
        .into_iter()
        .chain(detect_nutrition_flags(nutrition))
    {
        if let Some(&index) = positions.get(&flag.key) {
            flags[index] = flag;
        } else {
            positions.insert(flag.key.clone(), flags.len());
            flags.push(flag);
        }
    }

    tracing::debug!(flag_count = flags.len(), "Health flags detected");
    flags
}

/// Flag keys in order, as consumed by the scorer
#[must_use]
pub fn flag_keys(flags: &[HealthFlag]) -> Vec<String> {
    flags.iter().map(|flag| flag.key.clone()).collect()
}
