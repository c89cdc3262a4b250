// ABOUTME: Nutrition-level commands for nutriscan-cli
// ABOUTME: Canonicalization of raw payloads and health flag detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use crate::helpers::{print_json, read_json};
use nutriscan::errors::{AppError, AppResult};
use nutriscan::intelligence::{
    canonicalize_value, detect_flags, detect_ingredient_flags, per_serving_from_per_100g,
};
use nutriscan::models::{CanonicalNutrition, NutritionThresholds};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CanonicalReport {
    per100g: CanonicalNutrition,
    #[serde(skip_serializing_if = "Option::is_none")]
    grams: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_serving: Option<CanonicalNutrition>,
}

/// Canonicalize a raw payload, optionally scaling it to a portion
pub fn canonicalize(path: &Path, grams: Option<f64>) -> AppResult<()> {
    let raw: Value = read_json(path)?;
    if !raw.is_object() {
        return Err(AppError::invalid_format("nutrition payload must be a JSON object")
            .with_resource_id(path.display().to_string()));
    }

    let per100g = canonicalize_value(&raw);
    print_json(&CanonicalReport {
        per100g,
        grams,
        per_serving: grams.map(|grams| per_serving_from_per_100g(&per100g, grams)),
    })
}

/// Detect ingredient flags and, given a payload, nutrition threshold flags
pub fn flags(ingredients: Option<&str>, path: Option<&Path>) -> AppResult<()> {
    let text = ingredients.unwrap_or_default();
    let Some(path) = path else {
        return print_json(&detect_ingredient_flags(text));
    };

    let raw: Value = read_json(path)?;
    let thresholds = NutritionThresholds::from(&canonicalize_value(&raw));
    print_json(&detect_flags(text, &thresholds))
}
