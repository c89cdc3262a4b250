// ABOUTME: Data model module exports for nutrition, scoring, and health flags
// ABOUTME: Re-exports the shapes exchanged between the engines and their callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

/// Canonical nutrition, scorer inputs and product metadata
pub mod nutrition;

/// Health flags, severities and quality verdicts
pub mod flags;

pub use flags::{FlagSeverity, HealthFlag, QualityVerdict};
pub use nutrition::{
    lenient_f64, number_from_value, CanonicalNutrition, NutritionInput, NutritionThresholds,
    ProductMeta, ScoringInput,
};
