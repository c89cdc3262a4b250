// ABOUTME: Integration tests for nutrition canonicalization and per-serving scaling
// ABOUTME: Covers key precedence, unit conversions, zero-vs-missing, and portion edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{assert_close, granola_nutriments};
use nutriscan::intelligence::{canonicalize_per_100g, canonicalize_value, per_serving_from_per_100g};
use nutriscan::models::CanonicalNutrition;
use serde_json::json;

// ============================================================================
// Energy
// ============================================================================

#[test]
fn test_kilojoules_convert_to_kilocalories() {
    let nutrition = canonicalize_value(&json!({ "energy_kj_100g": 1046 }));
    assert_close(nutrition.energy_kcal, 250.0, 0.1);
}

#[test]
fn test_kilocalories_preferred_over_kilojoules() {
    let nutrition = canonicalize_value(&json!({
        "energy-kj_100g": 1674,
        "energy-kcal_100g": 400
    }));
    assert_eq!(nutrition.energy_kcal, 400.0);
}

#[test]
fn test_zero_kilocalories_fall_through_to_kilojoules() {
    let nutrition = canonicalize_value(&json!({
        "energy-kcal_100g": 0,
        "energy-kj_100g": 1000
    }));
    assert_close(nutrition.energy_kcal, 239.006, 1e-9);
}

#[test]
fn test_generic_calories_key() {
    let nutrition = canonicalize_value(&json!({ "calories": 120 }));
    assert_eq!(nutrition.energy_kcal, 120.0);
}

// ============================================================================
// Sodium tiers
// ============================================================================

#[test]
fn test_salt_converts_to_sodium_milligrams() {
    let nutrition = canonicalize_value(&json!({ "salt_100g": 2.5 }));
    assert_close(nutrition.sodium_mg, 982.5, 1e-9);
}

#[test]
fn test_sodium_grams_scale_to_milligrams() {
    let nutrition = canonicalize_value(&json!({ "sodium_100g": 0.4 }));
    assert_close(nutrition.sodium_mg, 400.0, 1e-9);
}

#[test]
fn test_milligram_keys_win_over_gram_and_salt_keys() {
    let nutrition = canonicalize_value(&json!({
        "salt_100g": 5.0,
        "sodium_100g": 0.5,
        "sodium_mg_100g": 200
    }));
    assert_eq!(nutrition.sodium_mg, 200.0);
}

#[test]
fn test_bare_sodium_key_is_grams() {
    let nutrition = canonicalize_value(&json!({ "sodium": 0.12 }));
    assert_close(nutrition.sodium_mg, 120.0, 1e-9);
}

#[test]
fn test_open_food_facts_sodium_and_salt_pairs() {
    // Open Food Facts ships every sodium and salt key in grams
    let nutrition = canonicalize_value(&json!({
        "sodium": 0.4,
        "sodium_100g": 0.4,
        "salt": 1.0,
        "salt_100g": 1.0
    }));
    assert_close(nutrition.sodium_mg, 400.0, 1e-9);
}

#[test]
fn test_gram_tier_used_when_milligram_tier_is_zero() {
    let nutrition = canonicalize_value(&json!({
        "sodium_mg_100g": 0,
        "sodium_100g": 0.25
    }));
    assert_close(nutrition.sodium_mg, 250.0, 1e-9);
}

// ============================================================================
// Key precedence and value coercion
// ============================================================================

#[test]
fn test_open_food_facts_payload() {
    let nutrition = canonicalize_value(&granola_nutriments());
    assert_eq!(
        nutrition,
        CanonicalNutrition {
            energy_kcal: 450.0,
            sugars_g: 12.0,
            saturated_fat_g: 2.0,
            sodium_mg: 100.0,
            fiber_g: 8.0,
            protein_g: 10.0,
        }
    );
}

#[test]
fn test_specific_keys_win_over_generic_keys() {
    let nutrition = canonicalize_value(&json!({
        "sugar": 30,
        "sugars_100g": 12,
        "protein": 1,
        "proteins_100g": 9
    }));
    assert_eq!(nutrition.sugars_g, 12.0);
    assert_eq!(nutrition.protein_g, 9.0);
}

#[test]
fn test_negative_values_are_skipped() {
    let nutrition = canonicalize_value(&json!({ "sugars_100g": -5, "sugars": 3 }));
    assert_eq!(nutrition.sugars_g, 3.0);
}

#[test]
fn test_numeric_strings_are_accepted() {
    let nutrition = canonicalize_value(&json!({ "proteins_100g": "7.5", "fiber_100g": " 3 " }));
    assert_eq!(nutrition.protein_g, 7.5);
    assert_eq!(nutrition.fiber_g, 3.0);
}

#[test]
fn test_british_fibre_spelling() {
    let nutrition = canonicalize_value(&json!({ "fibre_100g": 4.2 }));
    assert_eq!(nutrition.fiber_g, 4.2);
}

#[test]
fn test_zero_is_indistinguishable_from_missing() {
    let explicit_zero = canonicalize_value(&json!({ "sugars_100g": 0, "energy-kcal_100g": 50 }));
    let missing = canonicalize_value(&json!({ "energy-kcal_100g": 50 }));
    assert_eq!(explicit_zero, missing);
    assert_eq!(explicit_zero.sugars_g, 0.0);
}

#[test]
fn test_unknown_keys_and_garbage_yield_zeroes() {
    let nutrition = canonicalize_value(&json!({
        "carbohydrates_100g": 60,
        "sugars_100g": "lots",
        "fiber_100g": null,
        "proteins_100g": [4]
    }));
    assert_eq!(nutrition, CanonicalNutrition::default());
}

#[test]
fn test_non_object_payloads_yield_zeroes() {
    assert_eq!(canonicalize_value(&json!(null)), CanonicalNutrition::default());
    assert_eq!(canonicalize_value(&json!([1, 2, 3])), CanonicalNutrition::default());
    assert_eq!(canonicalize_value(&json!("450 kcal")), CanonicalNutrition::default());
}

#[test]
fn test_canonicalize_is_idempotent() {
    let raw = granola_nutriments();
    let map = raw.as_object().unwrap();
    assert_eq!(canonicalize_per_100g(map), canonicalize_per_100g(map));
}

// ============================================================================
// Per-serving scaling
// ============================================================================

fn reference_per_100g() -> CanonicalNutrition {
    CanonicalNutrition {
        energy_kcal: 400.0,
        sugars_g: 20.0,
        saturated_fat_g: 5.0,
        sodium_mg: 1000.0,
        fiber_g: 10.0,
        protein_g: 15.0,
    }
}

#[test]
fn test_per_serving_is_linear() {
    let serving = per_serving_from_per_100g(&reference_per_100g(), 45.0);
    assert_close(serving.energy_kcal, 180.0, 1e-9);
    assert_close(serving.sugars_g, 9.0, 1e-9);
    assert_close(serving.saturated_fat_g, 2.25, 1e-9);
    assert_close(serving.sodium_mg, 450.0, 1e-9);
    assert_close(serving.fiber_g, 4.5, 1e-9);
    assert_close(serving.protein_g, 6.75, 1e-9);
}

#[test]
fn test_hundred_grams_is_identity() {
    let per100g = reference_per_100g();
    assert_eq!(per_serving_from_per_100g(&per100g, 100.0), per100g);
}

#[test]
fn test_zero_grams_zeroes_everything() {
    let serving = per_serving_from_per_100g(&reference_per_100g(), 0.0);
    assert_eq!(serving, CanonicalNutrition::default());
}

#[test]
fn test_negative_grams_pass_through() {
    let serving = per_serving_from_per_100g(&reference_per_100g(), -10.0);
    assert_close(serving.energy_kcal, -40.0, 1e-9);
    assert_close(serving.sodium_mg, -100.0, 1e-9);
}
