// ABOUTME: Structured tracing events emitted around score computation
// ABOUTME: Fixed tags for inputs, value, error, and v2 diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Score telemetry
//!
//! Every event carries its tag in a `tag` field and as the message, so both
//! plain-text and JSON sinks can filter on it. Emitting an event never
//! changes a computed score.

use nutriscan_core::constants::telemetry::{
    SCORE_DIAG_MISSING, SCORE_DIAG_NAN, SCORE_ERROR, SCORE_INPUTS, SCORE_VALUE,
};
use nutriscan_core::models::ScoringInput;
use std::fmt;
use tracing::{error, info};

/// Where along the scoring path a failure was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStage {
    /// Out-of-range or non-finite score clamped by `validate_score`
    Validation,
    /// Panic inside the canonicalizing v2 path
    V2Calculation,
    /// Panic caught at `score_product`
    MainEntry,
}

impl ScoreStage {
    /// Name used in the `stage` field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::V2Calculation => "v2_calculation",
            Self::MainEntry => "main_entry",
        }
    }
}

impl fmt::Display for ScoreStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product name for log fields, empty when absent
#[must_use]
pub fn product_label(input: &ScoringInput) -> &str {
    input
        .meta
        .as_ref()
        .and_then(|meta| meta.name.as_deref())
        .unwrap_or("")
}

/// Pre-score inputs
pub fn record_inputs(input: &ScoringInput, path: &'static str) {
    info!(
        tag = SCORE_INPUTS,
        path,
        product = product_label(input),
        calories_100g = ?input.per100g.calories,
        sugar = ?input.per_serving.sugar,
        saturated_fat = ?input.per_serving.saturated_fat,
        sodium_mg = ?input.per_serving.sodium,
        fiber = ?input.per_serving.fiber,
        protein = ?input.per_serving.protein,
        flags = ?input.flags,
        "{SCORE_INPUTS}"
    );
}

/// Final score
pub fn record_value(score: u8, product: &str, path: &'static str) {
    info!(tag = SCORE_VALUE, path, product, score, "{SCORE_VALUE}");
}

/// Failure at `stage`; `detail` describes the problem
pub fn record_error(stage: ScoreStage, product: &str, detail: &str) {
    error!(
        tag = SCORE_ERROR,
        stage = stage.as_str(),
        product,
        detail,
        "{SCORE_ERROR}"
    );
}

/// Canonical fields that were non-finite before a v2 score
pub fn record_missing(product: &str, fields: &[&'static str]) {
    error!(tag = SCORE_DIAG_MISSING, product, fields = ?fields, "{SCORE_DIAG_MISSING}");
}

/// Non-finite raw v2 score
pub fn record_nan(product: &str, raw_score: f64) {
    error!(tag = SCORE_DIAG_NAN, product, raw_score, "{SCORE_DIAG_NAN}");
}

