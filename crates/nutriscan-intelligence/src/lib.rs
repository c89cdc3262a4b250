// ABOUTME: Food health engines: canonicalizer, flagger, and scorer
// ABOUTME: Pure functions over nutrition payloads with explicit configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![deny(unsafe_code)]

//! # Nutriscan Intelligence
//!
//! Three stateless engines composed in a fixed order:
//!
//! 1. [`canonicalize`] maps provider payloads with arbitrary key spellings and
//!    units into [`CanonicalNutrition`](nutriscan_core::models::CanonicalNutrition).
//! 2. [`flagger`] runs the ingredient and nutrition rule tables from
//!    [`flag_rules`] and returns deduplicated health flags.
//! 3. [`scoring`] turns per-100g and per-serving nutrition, product metadata
//!    and flag keys into an integer score in `[0, 100]`.
//!
//! None of the engines hold state, so they can be called from any number of
//! threads. [`score_cache::ScoreCache`] is an optional, caller-owned memo.

/// Scoring configuration and validation
pub mod config;

/// Provider payload to canonical nutrition mapping
pub mod canonicalize;

/// Static ingredient and nutrition rule tables
pub mod flag_rules;

/// Flag detection over ingredient text and nutrition thresholds
pub mod flagger;

/// Health score calculation, validation, and the safe entry points
pub mod scoring;

/// Structured score telemetry events
pub mod telemetry;

/// Caller-owned LRU memo for computed scores
pub mod score_cache;

pub use canonicalize::{canonicalize_per_100g, canonicalize_value, per_serving_from_per_100g};
pub use config::{ConfigError, ScoringConfig};
pub use flagger::{detect_flags, detect_ingredient_flags, detect_nutrition_flags};
pub use scoring::{
    calculate_health_score, legacy_score, safe_score_v2, score_product, score_to_stars,
    score_to_ten, validate_score,
};
