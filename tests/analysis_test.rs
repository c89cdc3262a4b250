// ABOUTME: End-to-end tests for product analysis from raw provider payloads
// ABOUTME: Checks flags, score, scale conversions, verdicts, and request parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{assert_close, candy_request, granola_request, init_test_logging};
use nutriscan::analysis::{analyze_product, HealthAnalysis, ProductAnalysisRequest};
use nutriscan::errors::ErrorCode;
use nutriscan::intelligence::ScoringConfig;
use nutriscan::models::{FlagSeverity, QualityVerdict};
use serde_json::json;

fn flag_keys(analysis: &HealthAnalysis) -> Vec<&str> {
    analysis.flags.iter().map(|flag| flag.key.as_str()).collect()
}

#[test]
fn test_granola_analysis() {
    init_test_logging();
    let analysis = analyze_product(&granola_request(), &ScoringConfig::default());

    assert_eq!(flag_keys(&analysis), vec!["high_fiber"]);
    assert_eq!(analysis.flags[0].severity, FlagSeverity::Good);
    assert_eq!(analysis.score, 86);
    assert_eq!(analysis.score_ten, 9);
    assert_eq!(analysis.stars, 4.5);
    assert_eq!(analysis.verdict, QualityVerdict::Excellent);
    assert_eq!(analysis.portion_grams, 45.0);
    assert_close(analysis.per_serving.sugars_g, 5.4, 1e-9);
}

#[test]
fn test_candy_analysis() {
    init_test_logging();
    let analysis = analyze_product(&candy_request(), &ScoringConfig::default());

    assert_eq!(
        flag_keys(&analysis),
        vec!["artificial_colors", "high_sugar", "low_fiber"]
    );
    assert_eq!(analysis.score, 52);
    assert_eq!(analysis.score_ten, 5);
    assert_eq!(analysis.stars, 2.5);
    assert_eq!(analysis.verdict, QualityVerdict::Moderate);
}

#[test]
fn test_empty_nutriments_still_analyze() {
    let analysis = analyze_product(&ProductAnalysisRequest::default(), &ScoringConfig::default());

    assert_eq!(flag_keys(&analysis), vec!["low_fiber"]);
    assert_eq!(analysis.score, 100);
    assert_eq!(analysis.portion_grams, 30.0);
}

#[test]
fn test_meta_portion_used_when_request_has_none() {
    let mut request = granola_request();
    request.portion_grams = None;

    let analysis = analyze_product(&request, &ScoringConfig::default());
    assert_eq!(analysis.portion_grams, 45.0);
    assert_eq!(analysis.score, 86);
}

#[test]
fn test_v2_routing_gives_same_result() {
    let config = ScoringConfig {
        score_v2_enabled: true,
        ..ScoringConfig::default()
    };
    assert_eq!(analyze_product(&granola_request(), &config).score, 86);
    assert_eq!(analyze_product(&candy_request(), &config).score, 52);
}

#[test]
fn test_request_from_camel_case_json() {
    let request = ProductAnalysisRequest::from_json(
        r#"{
            "nutriments": { "energy-kcal_100g": 450, "sugars_100g": 12 },
            "ingredientsText": "oats, sucralose",
            "portionGrams": "45",
            "meta": { "category": "cereal", "isUltraProcessed": false }
        }"#,
    )
    .unwrap();

    assert_eq!(request.portion_grams, Some(45.0));
    assert_eq!(request.ingredients_text.as_deref(), Some("oats, sucralose"));
    assert_eq!(request.meta.unwrap().category.as_deref(), Some("cereal"));
}

#[test]
fn test_request_accepts_snake_case_aliases() {
    let request = ProductAnalysisRequest::from_json(
        r#"{ "nutriments": {}, "ingredients_text": "msg", "portion_grams": 30 }"#,
    )
    .unwrap();

    assert_eq!(request.portion_grams, Some(30.0));
    assert_eq!(request.ingredients_text.as_deref(), Some("msg"));
}

#[test]
fn test_malformed_request_is_invalid_format() {
    let error = ProductAnalysisRequest::from_json("{ nutriments: ").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_analysis_serializes_camel_case() {
    let analysis = analyze_product(&candy_request(), &ScoringConfig::default());
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["score"], 52);
    assert_eq!(json["scoreTen"], 5);
    assert_eq!(json["verdict"], "moderate");
    assert_eq!(json["portionGrams"], 30.0);
    assert_eq!(json["flags"][0]["severity"], "warning");
    assert!(json["perServing"].is_object());
    assert_eq!(json["per100g"]["sugars_g"], json!(80.0));
}
