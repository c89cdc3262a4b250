// ABOUTME: Weighted penalty/bonus health score over per-serving nutrition and product metadata
// ABOUTME: Includes score validation, scale conversions, and the panic-safe entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Health Scorer
//!
//! The score starts at 100 and every term is added or subtracted
//! independently:
//!
//! ```text
//! score = 100
//!       - w.sugar     × min(sugar_g, cap) × m.sugar
//!       - w.sat_fat   × sat_fat_g         × m.sat_fat
//!       - w.sodium    × sodium_mg / 1000  × m.sodium
//!       - w.energy    × kcal_100g / 100   × m.energy_density
//!       - w.ultra     × [ultra-processed] × m.ultra_processed
//!       - w.additives × [additive flag]   × m.additives
//!       + w.fiber     × min(fiber_g, 8)   × m.fiber
//!       + w.protein   × min(protein_g, 20)× m.protein
//!       + category adjustment
//! ```
//!
//! and is then rounded and clamped to `[0, 100]`. All nutrient amounts are
//! per serving except energy density, which comes from the per-100g calories.
//!
//! [`score_product`] is the entry point callers should use: it never panics
//! and always returns a value in range.

use crate::canonicalize::{canonicalize_value, per_serving_from_per_100g};
use crate::config::ScoringConfig;
use crate::telemetry::{self, ScoreStage};
use nutriscan_core::constants::score::{BASE_SCORE, MAX_SCORE, MAX_STARS, MIN_SCORE};
use nutriscan_core::constants::units::MG_PER_G;
use nutriscan_core::models::{NutritionInput, ProductMeta, ScoringInput};
use serde_json::{json, Value};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

const PATH_STANDARD: &str = "standard";
const PATH_V2: &str = "v2";
const MISSING_META: &str = "product metadata is missing";

/// Non-negative value; missing and NaN read as zero
#[inline]
fn clamp0(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).map_or(0.0, |v| v.max(0.0))
}

/// Round and clamp to the score range, then narrow to `u8`
#[inline]
fn to_score(value: f64) -> u8 {
    // NaN saturates to 0
    value.round().clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Explicit marker, or a configured keyword in the name or category
fn is_ultra_processed(meta: &ProductMeta, config: &ScoringConfig) -> bool {
    if meta.is_ultra_processed.unwrap_or(false) {
        return true;
    }
    let name = meta.name_lower();
    let category = meta.category_lower();
    config
        .ultra_processed_keywords
        .iter()
        .any(|keyword| name.contains(keyword.as_str()) || category.contains(keyword.as_str()))
}

fn has_artificial_additives(flags: &[String], config: &ScoringConfig) -> bool {
    flags
        .iter()
        .any(|flag| config.additive_flags.iter().any(|additive| additive == flag))
}

/// Additive category adjustment
///
/// A cereal that misses the fiber or protein minimum gets no bonus and
/// continues to the candy and produce checks.
fn category_bonus(meta: &ProductMeta, per_serving: &NutritionInput, config: &ScoringConfig) -> f64 {
    let adjustments = &config.categories;
    let category = meta.category_lower();
    let name = meta.name_lower();

    if (category.contains("cereal") || category.contains("breakfast"))
        && clamp0(per_serving.fiber) >= adjustments.cereal_min_fiber_g
        && clamp0(per_serving.protein) >= adjustments.cereal_min_protein_g
    {
        return adjustments.cereal_bonus;
    }

    if category.contains("candy") || name.contains("gum") || name.contains("candy") {
        return -adjustments.candy_penalty;
    }

    if category.contains("fruit") || category.contains("vegetable") {
        return adjustments.produce_bonus;
    }

    0.0
}

/// Compute the health score for one product
///
/// Pure: identical input and configuration always give the same result.
/// Missing metadata is scored as an empty [`ProductMeta`]; [`score_product`]
/// treats it as a failure before getting here. The result is a
/// whole number in `[0, 100]`, returned as `f64` so callers can validate it.
#[must_use]
pub fn calculate_health_score(input: &ScoringInput, config: &ScoringConfig) -> f64 {
    let empty_meta = ProductMeta::default();
    let meta = input.meta.as_ref().unwrap_or(&empty_meta);
    let per_serving = &input.per_serving;
    let weights = &config.weights;
    let multipliers = &config.multipliers;
    let caps = &config.caps;

    let sugar = caps
        .sugar_penalty_g
        .map_or(clamp0(per_serving.sugar), |cap| clamp0(per_serving.sugar).min(cap));
    let sat_fat = clamp0(per_serving.saturated_fat);
    let sodium = clamp0(per_serving.sodium) / MG_PER_G;
    let fiber = clamp0(per_serving.fiber);
    let protein = clamp0(per_serving.protein);
    let energy_density = clamp0(input.per100g.calories) / 100.0;

    let ultra_processed = if is_ultra_processed(meta, config) { 1.0 } else { 0.0 };
    let additives = if has_artificial_additives(&input.flags, config) {
        1.0
    } else {
        0.0
    };

    let sugar_penalty = weights.sugar_penalty * sugar * multipliers.sugar;
    let sat_fat_penalty = weights.sat_fat_penalty * sat_fat * multipliers.sat_fat;
    let sodium_penalty = weights.sodium_penalty * sodium * multipliers.sodium;
    let energy_penalty =
        weights.energy_density_penalty * energy_density * multipliers.energy_density;
    let ultra_processed_penalty =
        weights.ultra_processed_penalty * ultra_processed * multipliers.ultra_processed;
    let additive_penalty = weights.ingredient_quality * additives * multipliers.additives;

    let fiber_bonus = weights.fiber_bonus * fiber.min(caps.fiber_g) * multipliers.fiber;
    let protein_bonus = weights.protein_bonus * protein.min(caps.protein_g) * multipliers.protein;

    let penalties = sugar_penalty
        + sat_fat_penalty
        + sodium_penalty
        + energy_penalty
        + ultra_processed_penalty
        + additive_penalty;
    let bonuses = fiber_bonus + protein_bonus + category_bonus(meta, per_serving, config);

    let score = BASE_SCORE - penalties + bonuses;
    score.round().clamp(MIN_SCORE, MAX_SCORE)
}

/// Score on a 0-10 scale
#[must_use]
pub fn score_to_ten(score: u8) -> u8 {
    to_score(f64::from(score) / 10.0).min(10)
}

/// Star rating in half-star steps, 0.0 to 5.0
#[must_use]
pub fn score_to_stars(score: u8) -> f64 {
    let stars = f64::from(score.min(100)) / MAX_SCORE * MAX_STARS;
    (stars * 2.0).round() / 2.0
}

/// Bring a raw score into `[0, 100]`
///
/// Out-of-range and non-finite values are logged at stage `validation` and
/// clamped; NaN becomes the configured neutral score.
#[must_use]
pub fn validate_score(score: f64, product_name: Option<&str>, config: &ScoringConfig) -> u8 {
    if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) {
        return to_score(score);
    }

    telemetry::record_error(
        ScoreStage::Validation,
        product_name.unwrap_or(""),
        &format!("score {score} out of valid range (0-100)"),
    );

    if score.is_nan() {
        config.neutral_score
    } else {
        to_score(score)
    }
}

/// Score that treats the per-serving values as per-100g as well
///
/// Used as the fallback when the canonicalizing path cannot produce a score.
#[must_use]
pub fn legacy_score(per_serving: &NutritionInput, config: &ScoringConfig) -> u8 {
    let input = ScoringInput {
        per100g: *per_serving,
        per_serving: *per_serving,
        meta: None,
        flags: Vec::new(),
    };
    to_score(calculate_health_score(&input, config))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned())
}

fn portion_grams(meta: &ProductMeta, config: &ScoringConfig) -> f64 {
    meta.portion_grams
        .filter(|grams| !grams.is_nan() && grams.abs() > 0.0)
        .unwrap_or(config.default_portion_grams)
}

/// Re-key typed per-100 g values for the canonicalizer
///
/// `NutritionInput::sodium` is milligrams, so it goes out under `sodium_mg`
/// rather than the bare `sodium` key that provider payloads use for grams.
fn raw_per_100g(per100g: &NutritionInput) -> Value {
    json!({
        "calories": per100g.calories,
        "sugar": per100g.sugar,
        "saturated_fat": per100g.saturated_fat,
        "sodium_mg": per100g.sodium,
        "fiber": per100g.fiber,
        "protein": per100g.protein,
    })
}

fn score_v2_unguarded(input: &ScoringInput, config: &ScoringConfig) -> u8 {
    let product = telemetry::product_label(input);

    let Some(meta) = input.meta.as_ref() else {
        telemetry::record_error(ScoreStage::V2Calculation, product, MISSING_META);
        return legacy_score(&input.per_serving, config);
    };

    let per100g = canonicalize_value(&raw_per_100g(&input.per100g));
    let grams = portion_grams(meta, config);
    let per_serving = per_serving_from_per_100g(&per100g, grams);

    let checks = [
        ("perServing.sugars_g", per_serving.sugars_g),
        ("perServing.saturated_fat_g", per_serving.saturated_fat_g),
        ("perServing.sodium_mg", per_serving.sodium_mg),
        ("per100g.energy_kcal", per100g.energy_kcal),
    ];
    let missing: Vec<&'static str> = checks
        .iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        telemetry::record_missing(product, &missing);
        return legacy_score(&input.per_serving, config);
    }

    let canonical_input = ScoringInput {
        per100g: NutritionInput::from(&per100g),
        per_serving: NutritionInput::from(&per_serving),
        meta: input.meta.clone(),
        flags: input.flags.clone(),
    };
    telemetry::record_inputs(&canonical_input, PATH_V2);

    let score = calculate_health_score(&canonical_input, config);
    if !score.is_finite() {
        telemetry::record_nan(product, score);
        return legacy_score(&input.per_serving, config);
    }

    let score = to_score(score);
    telemetry::record_value(score, product, PATH_V2);
    score
}

/// Score after re-canonicalizing `input.per100g` and deriving per-serving values
///
/// The portion is `meta.portion_grams`, or the configured default when it is
/// missing, zero or NaN. Missing `meta`, any non-finite canonical field, a
/// non-finite score or a panic falls back to [`legacy_score`] on the caller's
/// per-serving values.
#[must_use]
pub fn safe_score_v2(input: &ScoringInput, config: &ScoringConfig) -> u8 {
    panic::catch_unwind(AssertUnwindSafe(|| score_v2_unguarded(input, config))).unwrap_or_else(
        |payload| {
            telemetry::record_error(
                ScoreStage::V2Calculation,
                telemetry::product_label(input),
                &panic_message(payload.as_ref()),
            );
            legacy_score(&input.per_serving, config)
        },
    )
}

/// Main scoring entry point
///
/// Routes through [`safe_score_v2`] when `score_v2_enabled` is set, otherwise
/// through [`calculate_health_score`] and [`validate_score`]. On the standard
/// path a missing `meta` is a scoring failure. It and any panic are logged at
/// stage `main_entry` and yield the neutral score.
#[must_use]
pub fn score_product(input: &ScoringInput, config: &ScoringConfig) -> u8 {
    let product = telemetry::product_label(input);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        if config.score_v2_enabled {
            return safe_score_v2(input, config);
        }
        if input.meta.is_none() {
            telemetry::record_error(ScoreStage::MainEntry, product, MISSING_META);
            return config.neutral_score;
        }
        telemetry::record_inputs(input, PATH_STANDARD);
        let score = validate_score(
            calculate_health_score(input, config),
            Some(product),
            config,
        );
        telemetry::record_value(score, product, PATH_STANDARD);
        score
    }));

    outcome.unwrap_or_else(|payload| {
        telemetry::record_error(
            ScoreStage::MainEntry,
            product,
            &panic_message(payload.as_ref()),
        );
        config.neutral_score
    })
}
