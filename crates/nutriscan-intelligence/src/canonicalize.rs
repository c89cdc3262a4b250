// ABOUTME: Maps provider nutrition payloads with arbitrary key names into CanonicalNutrition
// ABOUTME: Handles kJ to kcal, grams to milligrams, and salt to sodium conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Nutrition canonicalizer
//!
//! Each canonical field is described by an ordered list of [`FieldSource`]
//! tiers. A tier is a list of candidate keys plus a scale factor. Resolution
//! walks the tiers in order and, within a tier, the keys in order; the first
//! value that is a finite, strictly positive number after scaling wins. If
//! nothing matches, the field is `0.0`.
//!
//! Because only positive values are accepted, an explicit `0` in the payload
//! is treated exactly like a missing key, and a later candidate key may win
//! over it.

use nutriscan_core::constants::units::{KCAL_PER_KJ, MG_PER_G, REFERENCE_GRAMS, SODIUM_PER_SALT};
use nutriscan_core::models::{number_from_value, CanonicalNutrition};
use serde_json::{Map, Value};

/// One tier of candidate keys sharing a unit
#[derive(Debug, Clone, Copy)]
pub struct FieldSource {
    /// Candidate keys, most specific first
    pub keys: &'static [&'static str],
    /// Factor converting the source unit to the canonical unit
    pub scale: f64,
}

impl FieldSource {
    const fn unscaled(keys: &'static [&'static str]) -> Self {
        Self { keys, scale: 1.0 }
    }

    const fn scaled(keys: &'static [&'static str], scale: f64) -> Self {
        Self { keys, scale }
    }
}

/// Energy: kcal keys first, then kJ keys converted to kcal
pub const ENERGY_SOURCES: &[FieldSource] = &[
    FieldSource::unscaled(&[
        "energy-kcal_100g",
        "energy_kcal_100g",
        "energy-kcal",
        "energy_kcal",
        "kcal_100g",
        "kcal",
        "calories_100g",
        "calories",
    ]),
    FieldSource::scaled(
        &[
            "energy-kj_100g",
            "energy_kj_100g",
            "energy-kj",
            "energy_kj",
            "kj_100g",
            "kj",
            "energy_100g",
            "energy",
        ],
        KCAL_PER_KJ,
    ),
];

/// Sugars in grams
pub const SUGAR_SOURCES: &[FieldSource] = &[FieldSource::unscaled(&[
    "sugars_100g",
    "sugar_100g",
    "sugars_g",
    "sugars",
    "sugar",
])];

/// Saturated fat in grams
pub const SATURATED_FAT_SOURCES: &[FieldSource] = &[FieldSource::unscaled(&[
    "saturated-fat_100g",
    "saturated_fat_100g",
    "saturated_fat_g",
    "saturated-fat",
    "saturated_fat",
    "satfat_100g",
    "satfat",
])];

/// Sodium: milligram keys, then gram keys, then salt converted to sodium
///
/// Only explicit `_mg` keys are milligrams. Open Food Facts reports both
/// `sodium` and `sodium_100g` in grams.
pub const SODIUM_SOURCES: &[FieldSource] = &[
    FieldSource::unscaled(&["sodium_mg_100g", "sodium_mg"]),
    FieldSource::scaled(
        &["sodium_100g", "sodium", "sodium_g_100g", "sodium_g"],
        MG_PER_G,
    ),
    FieldSource::scaled(&["salt_100g", "salt_g", "salt"], SODIUM_PER_SALT * MG_PER_G),
];

/// Fiber in grams
pub const FIBER_SOURCES: &[FieldSource] = &[FieldSource::unscaled(&[
    "fiber_100g",
    "fibre_100g",
    "fiber_g",
    "fiber",
    "fibre",
])];

/// Protein in grams
pub const PROTEIN_SOURCES: &[FieldSource] = &[FieldSource::unscaled(&[
    "proteins_100g",
    "protein_100g",
    "protein_g",
    "proteins",
    "protein",
])];

/// First finite, strictly positive value among `keys`, after scaling
fn pick(raw: &Map<String, Value>, keys: &[&str], scale: f64) -> Option<f64> {
    keys.iter()
        .filter_map(|key| raw.get(*key).and_then(number_from_value))
        .map(|value| value * scale)
        .find(|value| value.is_finite() && *value > 0.0)
}

/// Resolve one canonical field through its tiers, defaulting to zero
fn resolve(raw: &Map<String, Value>, sources: &[FieldSource]) -> f64 {
    sources
        .iter()
        .find_map(|source| pick(raw, source.keys, source.scale))
        .unwrap_or(0.0)
}

/// Canonicalize a per-100g provider payload
///
/// Never fails: unknown keys are ignored and unmatched fields are `0.0`.
#[must_use]
pub fn canonicalize_per_100g(raw: &Map<String, Value>) -> CanonicalNutrition {
    CanonicalNutrition {
        energy_kcal: resolve(raw, ENERGY_SOURCES),
        sugars_g: resolve(raw, SUGAR_SOURCES),
        saturated_fat_g: resolve(raw, SATURATED_FAT_SOURCES),
        sodium_mg: resolve(raw, SODIUM_SOURCES),
        fiber_g: resolve(raw, FIBER_SOURCES),
        protein_g: resolve(raw, PROTEIN_SOURCES),
    }
}

/// Canonicalize any JSON value; non-objects yield all-zero nutrition
#[must_use]
pub fn canonicalize_value(raw: &Value) -> CanonicalNutrition {
    raw.as_object()
        .map(canonicalize_per_100g)
        .unwrap_or_default()
}

/// Scale per-100g values to a portion of `grams`
///
/// Linear, with no rounding and no validation of `grams`: negative or
/// non-finite portions propagate into the result.
#[must_use]
pub fn per_serving_from_per_100g(per100g: &CanonicalNutrition, grams: f64) -> CanonicalNutrition {
    per100g.scaled(grams / REFERENCE_GRAMS)
}
