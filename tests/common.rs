// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and the reference granola and candy products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriscan`
//!
//! The two reference products are the calibration anchors for the scorer:
//! granola must land in 78-88 and sour candy in 42-58.

use nutriscan::analysis::ProductAnalysisRequest;
use nutriscan::intelligence::{canonicalize_value, per_serving_from_per_100g};
use nutriscan::models::{NutritionInput, ProductMeta, ScoringInput};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Granola, per 100 g
pub fn granola_nutriments() -> Value {
    json!({
        "energy-kcal_100g": 450,
        "sugars_100g": 12,
        "saturated-fat_100g": 2,
        "fiber_100g": 8,
        "proteins_100g": 10,
        "sodium_100g": 0.1
    })
}

/// Sour candy, per 100 g
pub fn candy_nutriments() -> Value {
    json!({
        "energy-kcal_100g": 350,
        "sugars_100g": 80,
        "saturated-fat_100g": 0,
        "fiber_100g": 0,
        "proteins_100g": 0,
        "sodium_100g": 0.05
    })
}

/// Granola metadata
pub fn granola_meta() -> ProductMeta {
    ProductMeta {
        category: Some("cereal".to_owned()),
        name: Some("Honey Almond Granola".to_owned()),
        portion_grams: Some(45.0),
        ..ProductMeta::default()
    }
}

/// Sour candy metadata
pub fn candy_meta() -> ProductMeta {
    ProductMeta {
        category: Some("candy".to_owned()),
        name: Some("Sour Punch Straws".to_owned()),
        portion_grams: Some(30.0),
        ..ProductMeta::default()
    }
}

/// Scoring input built the way callers do: canonicalize, scale, map fields
pub fn scoring_input(raw: &Value, grams: f64, meta: ProductMeta, flags: &[&str]) -> ScoringInput {
    let per100g = canonicalize_value(raw);
    let per_serving = per_serving_from_per_100g(&per100g, grams);
    ScoringInput {
        per100g: NutritionInput::from(&per100g),
        per_serving: NutritionInput::from(&per_serving),
        meta: Some(meta),
        flags: flags.iter().map(|flag| (*flag).to_owned()).collect(),
    }
}

/// Reference granola scoring input, 45 g serving
pub fn granola_input() -> ScoringInput {
    scoring_input(&granola_nutriments(), 45.0, granola_meta(), &[])
}

/// Reference candy scoring input, 30 g serving
pub fn candy_input() -> ScoringInput {
    scoring_input(
        &candy_nutriments(),
        30.0,
        candy_meta(),
        &["artificial_colors", "high_sugar"],
    )
}

/// Reference granola analysis request
pub fn granola_request() -> ProductAnalysisRequest {
    ProductAnalysisRequest {
        nutriments: granola_nutriments(),
        ingredients_text: Some("Rolled oats, honey, almonds, sunflower oil, sea salt".to_owned()),
        portion_grams: Some(45.0),
        meta: Some(granola_meta()),
    }
}

/// Reference candy analysis request
pub fn candy_request() -> ProductAnalysisRequest {
    ProductAnalysisRequest {
        nutriments: candy_nutriments(),
        ingredients_text: Some(
            "Sugar, corn syrup, wheat flour, citric acid, Red 40, Yellow 5, Blue 1".to_owned(),
        ),
        portion_grams: Some(30.0),
        meta: Some(candy_meta()),
    }
}

/// Assert two floats agree to within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
