// ABOUTME: End-to-end product analysis: canonicalize, flag, and score a raw nutrition payload
// ABOUTME: Request parsing from JSON and the combined HealthAnalysis result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Product analysis pipeline
//!
//! Runs the engines in their fixed order:
//!
//! 1. canonicalize the raw per-100g payload and derive the per-serving values
//! 2. detect ingredient and nutrition flags
//! 3. score with the flag keys and product metadata
//!
//! The scale conversions and quality verdict are derived from the score.

use nutriscan_core::errors::{AppError, AppResult};
use nutriscan_core::models::{
    lenient_f64, CanonicalNutrition, HealthFlag, NutritionInput, NutritionThresholds, ProductMeta,
    QualityVerdict, ScoringInput,
};
use nutriscan_intelligence::canonicalize::{canonicalize_value, per_serving_from_per_100g};
use nutriscan_intelligence::config::ScoringConfig;
use nutriscan_intelligence::flagger::{detect_flags, flag_keys};
use nutriscan_intelligence::scoring::{score_product, score_to_stars, score_to_ten};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A product as delivered by a food data provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysisRequest {
    /// Raw per-100g nutrition payload with provider-specific keys
    #[serde(default)]
    pub nutriments: Value,
    /// Free-text ingredient list
    #[serde(default, alias = "ingredients_text")]
    pub ingredients_text: Option<String>,
    /// Portion in grams; falls back to `meta.portionGrams`, then the default
    #[serde(default, alias = "portion_grams", deserialize_with = "lenient_f64")]
    pub portion_grams: Option<f64>,
    /// Product metadata
    #[serde(default)]
    pub meta: Option<ProductMeta>,
}

impl ProductAnalysisRequest {
    /// Parse a request from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the text is not valid JSON or does not
    /// match the request shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(AppError::from)
    }

    /// Portion used for the per-serving values
    ///
    /// The first finite, positive value among the request portion and the
    /// metadata portion, else the configured default.
    #[must_use]
    pub fn resolved_portion_grams(&self, config: &ScoringConfig) -> f64 {
        let meta_portion = self.meta.as_ref().and_then(|meta| meta.portion_grams);
        [self.portion_grams, meta_portion]
            .into_iter()
            .flatten()
            .find(|grams| grams.is_finite() && *grams > 0.0)
            .unwrap_or(config.default_portion_grams)
    }
}

/// Complete health analysis of one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    /// Canonical nutrition per 100 g
    pub per100g: CanonicalNutrition,
    /// Canonical nutrition for the portion
    pub per_serving: CanonicalNutrition,
    /// Portion used, grams
    pub portion_grams: f64,
    /// Deduplicated health flags
    pub flags: Vec<HealthFlag>,
    /// Health score, 0-100
    pub score: u8,
    /// Health score, 0-10
    pub score_ten: u8,
    /// Star rating in half-star steps
    pub stars: f64,
    /// Quality verdict for the score
    pub verdict: QualityVerdict,
}

/// Canonicalize, flag and score a product
#[must_use]
pub fn analyze_product(request: &ProductAnalysisRequest, config: &ScoringConfig) -> HealthAnalysis {
    let per100g = canonicalize_value(&request.nutriments);
    let portion_grams = request.resolved_portion_grams(config);
    let per_serving = per_serving_from_per_100g(&per100g, portion_grams);

    let flags = detect_flags(
        request.ingredients_text.as_deref().unwrap_or_default(),
        &NutritionThresholds::from(&per100g),
    );

    let meta = ProductMeta {
        portion_grams: Some(portion_grams),
        ..request.meta.clone().unwrap_or_default()
    };
    let input = ScoringInput {
        per100g: NutritionInput::from(&per100g),
        per_serving: NutritionInput::from(&per_serving),
        meta: Some(meta),
        flags: flag_keys(&flags),
    };
    let score = score_product(&input, config);

    debug!(
        product = input.meta.as_ref().and_then(|m| m.name.as_deref()).unwrap_or(""),
        portion_grams,
        flag_count = flags.len(),
        score,
        "Product analyzed"
    );

    HealthAnalysis {
        per100g,
        per_serving,
        portion_grams,
        flags,
        score,
        score_ten: score_to_ten(score),
        stars: score_to_stars(score),
        verdict: QualityVerdict::from_score(score),
    }
}
