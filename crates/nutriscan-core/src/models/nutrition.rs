// ABOUTME: Nutrition models shared by the canonicalizer, flagger, and scorer
// ABOUTME: CanonicalNutrition, NutritionInput, ProductMeta, ScoringInput, NutritionThresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Nutrition values in a fixed schema, either per 100 g or per serving
///
/// Every field is non-negative and defaults to `0.0`. A zero value means the
/// nutrient was either reported as zero or not reported at all; the two cases
/// are not distinguished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalNutrition {
    /// Energy in kilocalories
    pub energy_kcal: f64,
    /// Total sugars in grams
    pub sugars_g: f64,
    /// Saturated fat in grams
    pub saturated_fat_g: f64,
    /// Sodium in milligrams, whatever unit the source used
    pub sodium_mg: f64,
    /// Dietary fiber in grams
    pub fiber_g: f64,
    /// Protein in grams
    pub protein_g: f64,
}

impl CanonicalNutrition {
    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            energy_kcal: self.energy_kcal * factor,
            sugars_g: self.sugars_g * factor,
            saturated_fat_g: self.saturated_fat_g * factor,
            sodium_mg: self.sodium_mg * factor,
            fiber_g: self.fiber_g * factor,
            protein_g: self.protein_g * factor,
        }
    }
}

/// Loosely named nutrition values consumed by the scorer
///
/// Field names follow the nutrition log columns rather than
/// [`CanonicalNutrition`]; use the `From` conversion to map between them.
/// `sodium` is in milligrams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInput {
    /// Energy in kilocalories
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbs: Option<f64>,
    /// Total fat in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat: Option<f64>,
    /// Saturated fat in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub saturated_fat: Option<f64>,
    /// Sugars in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar: Option<f64>,
    /// Fiber in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium: Option<f64>,
}

impl From<&CanonicalNutrition> for NutritionInput {
    fn from(canonical: &CanonicalNutrition) -> Self {
        Self {
            calories: Some(canonical.energy_kcal),
            protein: Some(canonical.protein_g),
            carbs: None,
            fat: None,
            saturated_fat: Some(canonical.saturated_fat_g),
            sugar: Some(canonical.sugars_g),
            fiber: Some(canonical.fiber_g),
            sodium: Some(canonical.sodium_mg),
        }
    }
}

/// Product metadata used for category adjustments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    /// Product category (free text, e.g. "cereal", "candy")
    #[serde(default)]
    pub category: Option<String>,
    /// Product name
    #[serde(default)]
    pub name: Option<String>,
    /// Brand name
    #[serde(default)]
    pub brand: Option<String>,
    /// Explicit ultra-processed marker from the data provider
    #[serde(default)]
    pub is_ultra_processed: Option<bool>,
    /// Portion size in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub portion_grams: Option<f64>,
}

impl ProductMeta {
    /// Lower-cased category, empty when absent
    #[must_use]
    pub fn category_lower(&self) -> String {
        self.category.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lower-cased name, empty when absent
    #[must_use]
    pub fn name_lower(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Complete scorer input
///
/// `meta` is optional so that a payload with `"meta": null` still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringInput {
    /// Nutrition per 100 g (only `calories` is read, as energy density)
    #[serde(default)]
    pub per100g: NutritionInput,
    /// Nutrition for the consumed portion
    #[serde(default)]
    pub per_serving: NutritionInput,
    /// Product metadata
    #[serde(default)]
    pub meta: Option<ProductMeta>,
    /// Flag keys, e.g. `artificial_colors`
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Per-100g snapshot consulted by the nutrition threshold rules
///
/// Missing fields are treated as zero by the rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionThresholds {
    /// Sugars, g/100g
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar_g_100g: Option<f64>,
    /// Saturated fat, g/100g
    #[serde(default, deserialize_with = "lenient_f64")]
    pub satfat_g_100g: Option<f64>,
    /// Fiber, g/100g
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber_g_100g: Option<f64>,
    /// Sodium, mg/100g
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium_mg_100g: Option<f64>,
    /// Protein, g/100g
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_g_100g: Option<f64>,
}

impl From<&CanonicalNutrition> for NutritionThresholds {
    fn from(per100g: &CanonicalNutrition) -> Self {
        Self {
            sugar_g_100g: Some(per100g.sugars_g),
            satfat_g_100g: Some(per100g.saturated_fat_g),
            fiber_g_100g: Some(per100g.fiber_g),
            sodium_mg_100g: Some(per100g.sodium_mg),
            protein_g_100g: Some(per100g.protein_g),
        }
    }
}

/// Interpret a JSON value as a number the way loosely typed payloads expect
///
/// Numbers pass through, numeric strings are parsed, booleans map to 1/0 and
/// everything else is `None`.
#[must_use]
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Serde helper: accept numbers, numeric strings, or anything else as `None`
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}
