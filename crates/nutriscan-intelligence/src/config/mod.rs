// ABOUTME: Configuration module for the scoring engine
// ABOUTME: Re-exports scoring weights, caps, category adjustments, and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

/// Configuration error types
pub mod error;

/// Scoring weights, multipliers, caps and toggles
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    CategoryAdjustments, NutrientCaps, PenaltyMultipliers, ScoringConfig, ScoringWeights,
};
