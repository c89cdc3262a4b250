// ABOUTME: Product-level commands for nutriscan-cli
// ABOUTME: Full analysis of provider products and scoring of prepared inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use crate::helpers::{print_json, read_input, read_json};
use nutriscan::analysis::{analyze_product, ProductAnalysisRequest};
use nutriscan::errors::{AppError, AppResult};
use nutriscan::intelligence::scoring::{score_product, score_to_stars, score_to_ten};
use nutriscan::intelligence::ScoringConfig;
use nutriscan::models::{NutritionInput, QualityVerdict, ScoringInput};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreReport {
    score: u8,
    score_ten: u8,
    stars: f64,
    verdict: QualityVerdict,
}

/// Canonicalize, flag, and score one product
pub fn analyze(path: &Path, grams: Option<f64>, config: &ScoringConfig) -> AppResult<()> {
    let text = read_input(path)?;
    let mut request = ProductAnalysisRequest::from_json(&text)
        .map_err(|e| e.with_resource_id(path.display().to_string()))?;
    if grams.is_some() {
        request.portion_grams = grams;
    }

    let analysis = analyze_product(&request, config);
    info!(
        score = analysis.score,
        verdict = %analysis.verdict,
        flags = analysis.flags.len(),
        "Analysis complete"
    );
    print_json(&analysis)
}

/// Score a prepared scoring input
pub fn score(path: &Path, config: &ScoringConfig) -> AppResult<()> {
    let input: ScoringInput = read_json(path)?;
    let empty = NutritionInput::default();
    if input.per_serving == empty && input.per100g == empty {
        return Err(AppError::invalid_input(
            "scoring input has neither per100g nor perServing values",
        )
        .with_resource_id(path.display().to_string()));
    }

    let score = score_product(&input, config);
    print_json(&ScoreReport {
        score,
        score_ten: score_to_ten(score),
        stars: score_to_stars(score),
        verdict: QualityVerdict::from_score(score),
    })
}
