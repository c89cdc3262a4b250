// ABOUTME: Integration tests for ingredient and nutrition health flag detection
// ABOUTME: Covers per-substance sweetener flags, threshold boundaries, and deduplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan::intelligence::flag_rules::{INGREDIENT_RULES, INGREDIENT_RULE_SPECS, NUTRITION_RULES};
use nutriscan::intelligence::{detect_flags, detect_ingredient_flags, detect_nutrition_flags};
use nutriscan::models::{FlagSeverity, HealthFlag, NutritionThresholds};
use std::collections::HashSet;

fn keys(flags: &[HealthFlag]) -> Vec<&str> {
    flags.iter().map(|flag| flag.key.as_str()).collect()
}

fn sodium(mg: f64) -> NutritionThresholds {
    NutritionThresholds {
        sodium_mg_100g: Some(mg),
        fiber_g_100g: Some(4.0),
        ..NutritionThresholds::default()
    }
}

// ============================================================================
// Ingredient rules
// ============================================================================

#[test]
fn test_every_ingredient_pattern_compiles() {
    assert_eq!(INGREDIENT_RULES.len(), INGREDIENT_RULE_SPECS.len());
}

#[test]
fn test_single_sweetener_yields_single_flag() {
    let flags = detect_ingredient_flags("water, aspartame, natural flavors");
    assert_eq!(keys(&flags), vec!["aspartame"]);
    assert_eq!(flags[0].severity, FlagSeverity::Warning);
    assert!(flags[0].description.is_some());
}

#[test]
fn test_each_sweetener_is_a_separate_flag_in_rule_order() {
    let flags = detect_ingredient_flags("sucralose, acesulfame potassium, saccharin, aspartame");
    assert_eq!(
        keys(&flags),
        vec!["aspartame", "acesulfame_k", "sucralose", "saccharin"]
    );
}

#[test]
fn test_e_numbers_match_sweeteners() {
    assert_eq!(keys(&detect_ingredient_flags("sweetener (E951)")), vec!["aspartame"]);
    assert_eq!(
        keys(&detect_ingredient_flags("sweeteners: e950, e955")),
        vec!["acesulfame_k", "sucralose"]
    );
}

#[test]
fn test_acesulfame_k_spelling_variants() {
    for text in ["acesulfame k", "Acesulfame-K", "acesulfame potassium", "ace-k"] {
        assert_eq!(
            keys(&detect_ingredient_flags(text)),
            vec!["acesulfame_k"],
            "{text}"
        );
    }
}

#[test]
fn test_matching_is_case_insensitive() {
    let flags = detect_ingredient_flags("  PARTIALLY HYDROGENATED Soybean Oil  ");
    assert_eq!(keys(&flags), vec!["trans_fats"]);
    assert_eq!(flags[0].severity, FlagSeverity::Danger);
}

#[test]
fn test_curing_agents_are_danger() {
    let flags = detect_ingredient_flags("pork, water, salt, sodium nitrite");
    assert_eq!(keys(&flags), vec!["nitrites"]);
    assert_eq!(flags[0].severity, FlagSeverity::Danger);
}

#[test]
fn test_artificial_color_names() {
    for text in [
        "FD&C Yellow No. 5",
        "red 40",
        "Blue 1 Lake",
        "colour (e129)",
        "tartrazine",
    ] {
        assert_eq!(
            keys(&detect_ingredient_flags(text)),
            vec!["artificial_colors"],
            "{text}"
        );
    }
}

#[test]
fn test_corn_syrup_and_flavor_enhancers() {
    let flags = detect_ingredient_flags(
        "high fructose corn syrup, monosodium glutamate, spices",
    );
    assert_eq!(keys(&flags), vec!["high_fructose_corn_syrup", "msg"]);
}

#[test]
fn test_plain_corn_syrup_is_not_hfcs() {
    assert!(detect_ingredient_flags("sugar, corn syrup, citric acid").is_empty());
}

#[test]
fn test_clean_ingredients_yield_no_flags() {
    assert!(detect_ingredient_flags("whole grain oats, cane sugar, sea salt").is_empty());
}

#[test]
fn test_empty_text_yields_no_flags() {
    assert!(detect_ingredient_flags("").is_empty());
    assert!(detect_ingredient_flags("   ").is_empty());
}

// ============================================================================
// Nutrition thresholds
// ============================================================================

#[test]
fn test_sodium_boundaries() {
    let below = detect_nutrition_flags(&sodium(599.0));
    assert!(!keys(&below).iter().any(|key| key.contains("sodium")));

    let at_high = detect_nutrition_flags(&sodium(600.0));
    assert_eq!(keys(&at_high), vec!["high_sodium"]);
    assert_eq!(at_high[0].label, "Sodium ≥600 mg/100g");

    let at_very_high = detect_nutrition_flags(&sodium(1500.0));
    assert_eq!(keys(&at_very_high), vec!["high_sodium", "very_high_sodium"]);
    assert_eq!(at_very_high[1].severity, FlagSeverity::Danger);
}

#[test]
fn test_sugar_boundary() {
    let at = NutritionThresholds {
        sugar_g_100g: Some(22.5),
        fiber_g_100g: Some(4.0),
        ..NutritionThresholds::default()
    };
    assert_eq!(keys(&detect_nutrition_flags(&at)), vec!["high_sugar"]);

    let below = NutritionThresholds {
        sugar_g_100g: Some(22.4),
        ..at
    };
    assert!(detect_nutrition_flags(&below).is_empty());
}

#[test]
fn test_missing_values_read_as_zero() {
    let flags = detect_nutrition_flags(&NutritionThresholds::default());
    assert_eq!(keys(&flags), vec!["low_fiber"]);
}

#[test]
fn test_beneficial_flags_are_good() {
    let nutrition = NutritionThresholds {
        fiber_g_100g: Some(6.0),
        protein_g_100g: Some(12.0),
        satfat_g_100g: Some(5.0),
        ..NutritionThresholds::default()
    };
    let flags = detect_nutrition_flags(&nutrition);
    assert_eq!(
        keys(&flags),
        vec!["high_saturated_fat", "high_fiber", "high_protein"]
    );
    assert_eq!(flags[0].severity, FlagSeverity::Warning);
    assert_eq!(flags[1].severity, FlagSeverity::Good);
    assert_eq!(flags[2].severity, FlagSeverity::Good);
}

#[test]
fn test_low_fiber_boundary_is_inclusive() {
    let at = NutritionThresholds {
        fiber_g_100g: Some(2.0),
        ..NutritionThresholds::default()
    };
    assert_eq!(keys(&detect_nutrition_flags(&at)), vec!["low_fiber"]);

    let above = NutritionThresholds {
        fiber_g_100g: Some(2.1),
        ..NutritionThresholds::default()
    };
    assert!(detect_nutrition_flags(&above).is_empty());
}

#[test]
fn test_nutrition_rule_order_is_stable() {
    let rule_keys: Vec<&str> = NUTRITION_RULES.iter().map(|rule| rule.key).collect();
    assert_eq!(
        rule_keys,
        vec![
            "high_sugar",
            "high_saturated_fat",
            "high_sodium",
            "very_high_sodium",
            "low_fiber",
            "high_fiber",
            "high_protein"
        ]
    );
}

// ============================================================================
// Combined detection
// ============================================================================

#[test]
fn test_combined_detection_orders_ingredients_first() {
    let nutrition = NutritionThresholds {
        sugar_g_100g: Some(80.0),
        sodium_mg_100g: Some(50.0),
        ..NutritionThresholds::default()
    };
    let flags = detect_flags("sugar, corn syrup, red 40, yellow 5", &nutrition);
    assert_eq!(
        keys(&flags),
        vec!["artificial_colors", "high_sugar", "low_fiber"]
    );
}

#[test]
fn test_combined_detection_has_unique_keys() {
    let nutrition = NutritionThresholds {
        sugar_g_100g: Some(40.0),
        satfat_g_100g: Some(9.0),
        sodium_mg_100g: Some(2000.0),
        fiber_g_100g: Some(0.5),
        protein_g_100g: Some(20.0),
    };
    let text = "aspartame, aspartame, sucralose, e951, msg, red 40, partially hydrogenated oil, \
                sodium nitrite, high fructose corn syrup, saccharin, acesulfame k";
    let flags = detect_flags(text, &nutrition);

    let unique: HashSet<&str> = keys(&flags).into_iter().collect();
    assert_eq!(unique.len(), flags.len());
    assert_eq!(flags.len(), 15);
}

#[test]
fn test_detection_is_deterministic() {
    let nutrition = sodium(1800.0);
    let text = "salt, msg, sucralose";
    assert_eq!(detect_flags(text, &nutrition), detect_flags(text, &nutrition));
}
