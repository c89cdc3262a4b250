// ABOUTME: Health score configuration: weights, per-term multipliers, caps, and category bonuses
// ABOUTME: Defaults reproduce the calibrated scoring model (granola ~86, sour candy ~52)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Health Score Configuration
//!
//! Each score term is `weight × value × multiplier`. Weights and multipliers
//! are kept separate so the calibration reads the same way the model is
//! usually described ("0.30 × sugar × 8").
//!
//! # Calibration
//!
//! The defaults must keep two reference products in range:
//!
//! - Granola, 45 g serving, category `cereal`: 78-88 (scores 86)
//! - Sour candy, 30 g serving, category `candy`, `artificial_colors`: 42-58 (scores 52)
//!
//! The candy target is only reachable with the per-serving sugar cap in
//! [`NutrientCaps::sugar_penalty_g`]; without it the same product scores 33.

use super::error::ConfigError;
use nutriscan_core::constants::portion::DEFAULT_PORTION_GRAMS;
use nutriscan_core::constants::score::NEUTRAL_SCORE;
use serde::{Deserialize, Serialize};

/// Relative weight of each score term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Sugar penalty weight (0.30)
    pub sugar_penalty: f64,
    /// Saturated fat penalty weight (0.15)
    pub sat_fat_penalty: f64,
    /// Sodium penalty weight (0.10)
    pub sodium_penalty: f64,
    /// Energy density penalty weight (0.10)
    pub energy_density_penalty: f64,
    /// Ultra-processed penalty weight (0.10)
    pub ultra_processed_penalty: f64,
    /// Fiber bonus weight (0.10)
    pub fiber_bonus: f64,
    /// Protein bonus weight (0.10)
    pub protein_bonus: f64,
    /// Artificial additive penalty weight (0.05)
    pub ingredient_quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sugar_penalty: 0.30,
            sat_fat_penalty: 0.15,
            sodium_penalty: 0.10,
            energy_density_penalty: 0.10,
            ultra_processed_penalty: 0.10,
            fiber_bonus: 0.10,
            protein_bonus: 0.10,
            ingredient_quality: 0.05,
        }
    }
}

/// Points per unit for each score term, applied after the weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyMultipliers {
    /// Per gram of sugar per serving
    pub sugar: f64,
    /// Per gram of saturated fat per serving
    pub sat_fat: f64,
    /// Per gram of sodium per serving
    pub sodium: f64,
    /// Per unit of energy density (kcal/100g ÷ 100)
    pub energy_density: f64,
    /// Flat amount when the product is ultra-processed
    pub ultra_processed: f64,
    /// Flat amount when artificial additives are flagged
    pub additives: f64,
    /// Per gram of fiber per serving (bonus)
    pub fiber: f64,
    /// Per gram of protein per serving (bonus)
    pub protein: f64,
}

impl Default for PenaltyMultipliers {
    fn default() -> Self {
        Self {
            sugar: 8.0,
            sat_fat: 10.0,
            sodium: 10.0,
            energy_density: 8.0,
            ultra_processed: 15.0,
            additives: 10.0,
            fiber: 2.0,
            protein: 1.5,
        }
    }
}

/// Caps on the per-serving amounts that feed bonuses and penalties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientCaps {
    /// Fiber counted toward the bonus, grams
    pub fiber_g: f64,
    /// Protein counted toward the bonus, grams
    pub protein_g: f64,
    /// Sugar counted toward the penalty, grams; `None` leaves it uncapped
    ///
    /// The penalty saturates at the cap: with the default 16 g, a serving with
    /// 16 g of sugar and one with 300 g lose the same points.
    pub sugar_penalty_g: Option<f64>,
}

impl Default for NutrientCaps {
    fn default() -> Self {
        Self {
            fiber_g: 8.0,
            protein_g: 20.0,
            sugar_penalty_g: Some(16.0),
        }
    }
}

/// Additive category adjustments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAdjustments {
    /// Bonus for cereal/breakfast items meeting both minimums
    pub cereal_bonus: f64,
    /// Minimum fiber per serving for the cereal bonus, grams
    pub cereal_min_fiber_g: f64,
    /// Minimum protein per serving for the cereal bonus, grams
    pub cereal_min_protein_g: f64,
    /// Amount subtracted for candy and gum
    pub candy_penalty: f64,
    /// Bonus for fruit and vegetable categories
    pub produce_bonus: f64,
}

impl Default for CategoryAdjustments {
    fn default() -> Self {
        Self {
            cereal_bonus: 3.0,
            cereal_min_fiber_g: 3.0,
            cereal_min_protein_g: 4.0,
            candy_penalty: 5.0,
            produce_bonus: 2.0,
        }
    }
}

/// Complete scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Term weights
    pub weights: ScoringWeights,
    /// Per-term multipliers
    pub multipliers: PenaltyMultipliers,
    /// Nutrient caps
    pub caps: NutrientCaps,
    /// Category bonuses and penalties
    pub categories: CategoryAdjustments,
    /// Name/category substrings that mark a product as ultra-processed
    pub ultra_processed_keywords: Vec<String>,
    /// Flag keys that count as artificial additives
    pub additive_flags: Vec<String>,
    /// Score returned when scoring fails outright
    pub neutral_score: u8,
    /// Portion used by the v2 path when the product has none
    pub default_portion_grams: f64,
    /// Route `score_product` through canonicalization first
    pub score_v2_enabled: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            multipliers: PenaltyMultipliers::default(),
            caps: NutrientCaps::default(),
            categories: CategoryAdjustments::default(),
            ultra_processed_keywords: [
                "soda",
                "candy",
                "chips",
                "crackers",
                "cookies",
                "instant",
                "frozen meal",
                "packaged snack",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            additive_flags: [
                "artificial_colors",
                "artificial_flavors",
                "preservatives",
                "high_fructose_corn_syrup",
                "trans_fats",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            neutral_score: NEUTRAL_SCORE,
            default_portion_grams: DEFAULT_PORTION_GRAMS,
            score_v2_enabled: false,
        }
    }
}

impl ScoringConfig {
    /// Validate weights, multipliers, caps and fallbacks
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` for a negative or non-finite weight
    /// or multiplier, `ConfigError::ValueOutOfRange` for a bad cap or portion and
    /// `ConfigError::InvalidRange` for a neutral score above 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        let m = &self.multipliers;
        let terms = [
            ("weights.sugar_penalty", w.sugar_penalty),
            ("weights.sat_fat_penalty", w.sat_fat_penalty),
            ("weights.sodium_penalty", w.sodium_penalty),
            ("weights.energy_density_penalty", w.energy_density_penalty),
            ("weights.ultra_processed_penalty", w.ultra_processed_penalty),
            ("weights.fiber_bonus", w.fiber_bonus),
            ("weights.protein_bonus", w.protein_bonus),
            ("weights.ingredient_quality", w.ingredient_quality),
            ("multipliers.sugar", m.sugar),
            ("multipliers.sat_fat", m.sat_fat),
            ("multipliers.sodium", m.sodium),
            ("multipliers.energy_density", m.energy_density),
            ("multipliers.ultra_processed", m.ultra_processed),
            ("multipliers.additives", m.additives),
            ("multipliers.fiber", m.fiber),
            ("multipliers.protein", m.protein),
        ];
        for (name, value) in terms {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }

        let caps = [
            ("caps.fiber_g", Some(self.caps.fiber_g)),
            ("caps.protein_g", Some(self.caps.protein_g)),
            ("caps.sugar_penalty_g", self.caps.sugar_penalty_g),
            ("default_portion_grams", Some(self.default_portion_grams)),
        ];
        for (name, value) in caps {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::ValueOutOfRange(format!(
                        "{name} must be a finite, positive number, got {value}"
                    )));
                }
            }
        }

        let categories = &self.categories;
        let adjustments = [
            categories.cereal_bonus,
            categories.cereal_min_fiber_g,
            categories.cereal_min_protein_g,
            categories.candy_penalty,
            categories.produce_bonus,
        ];
        if adjustments.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "category adjustments must be finite",
            ));
        }

        if self.neutral_score > 100 {
            return Err(ConfigError::InvalidRange(
                "neutral_score must be between 0 and 100",
            ));
        }

        Ok(())
    }
}
