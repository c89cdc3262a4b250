// ABOUTME: Application-wide constants for unit conversion, score bounds, and telemetry
// ABOUTME: Groups conversion factors, score limits, and structured log tags by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Constants organized by domain.

/// Unit conversion factors used by the canonicalizer
pub mod units {
    /// Kilocalories per kilojoule
    pub const KCAL_PER_KJ: f64 = 0.239_006;

    /// Grams of sodium per gram of salt (NaCl is ~39.3% sodium by mass)
    pub const SODIUM_PER_SALT: f64 = 0.393;

    /// Milligrams per gram
    pub const MG_PER_G: f64 = 1000.0;

    /// Reference mass for per-100g nutrition values
    pub const REFERENCE_GRAMS: f64 = 100.0;
}

/// Score range and conversions
pub mod score {
    /// Lowest possible health score
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest possible health score
    pub const MAX_SCORE: f64 = 100.0;

    /// Neutral score returned when scoring fails
    pub const NEUTRAL_SCORE: u8 = 50;

    /// Starting value before penalties and bonuses are applied
    pub const BASE_SCORE: f64 = 100.0;

    /// Maximum star rating
    pub const MAX_STARS: f64 = 5.0;

    /// Verdict thresholds on the 0-100 scale
    pub const EXCELLENT_THRESHOLD: u8 = 80;
    /// Lower bound of the "good" verdict
    pub const GOOD_THRESHOLD: u8 = 70;
    /// Lower bound of the "moderate" verdict
    pub const MODERATE_THRESHOLD: u8 = 50;
}

/// Portion defaults
pub mod portion {
    /// Serving size used when a caller provides no portion
    pub const DEFAULT_PORTION_GRAMS: f64 = 30.0;
}

/// Structured log tags emitted around score computation
pub mod telemetry {
    /// Inputs recorded right before a score is computed
    pub const SCORE_INPUTS: &str = "[REPORT][V2][SCORE][INPUTS]";

    /// Final validated score value
    pub const SCORE_VALUE: &str = "[REPORT][V2][SCORE][VALUE]";

    /// Any failure along the scoring path
    pub const SCORE_ERROR: &str = "[REPORT][V2][SCORE][ERROR]";

    /// Canonical fields missing before a v2 score
    pub const SCORE_DIAG_MISSING: &str = "[REPORT][V2][SCORE][DIAG_MISSING]";

    /// Non-finite v2 score
    pub const SCORE_DIAG_NAN: &str = "[REPORT][V2][SCORE][DIAG_NAN]";
}

/// Service identity used by logging
pub mod service_names {
    /// Name reported in structured logs
    pub const NUTRISCAN: &str = "nutriscan";
}
