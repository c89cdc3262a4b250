// ABOUTME: Environment-based configuration for scoring and logging
// ABOUTME: Defaults, NUTRISCAN_* overrides, validation, and a process-wide OnceLock instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Engine configuration from the environment
//!
//! | Variable                          | Effect                                     |
//! |-----------------------------------|--------------------------------------------|
//! | `NUTRISCAN_SCORE_V2`              | `1`/`true` routes scoring through v2       |
//! | `NUTRISCAN_DEFAULT_PORTION_GRAMS` | Portion used when a product has none       |
//! | `NUTRISCAN_NEUTRAL_SCORE`         | Score returned when scoring fails          |
//! | `NUTRISCAN_SUGAR_PENALTY_CAP_G`   | Per-serving sugar cap; `none` disables it  |
//! | `NUTRISCAN_SUGAR_WEIGHT`          | Sugar penalty weight                       |
//! | `NUTRISCAN_SAT_FAT_WEIGHT`        | Saturated fat penalty weight               |
//! | `NUTRISCAN_SODIUM_WEIGHT`         | Sodium penalty weight                      |
//!
//! Logging is configured by [`LoggingConfig::from_env`].

use crate::logging::LoggingConfig;
use nutriscan_intelligence::config::{ConfigError, ScoringConfig};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Toggle for the canonicalizing v2 scorer
pub const ENV_SCORE_V2: &str = "NUTRISCAN_SCORE_V2";
/// Default portion in grams
pub const ENV_DEFAULT_PORTION_GRAMS: &str = "NUTRISCAN_DEFAULT_PORTION_GRAMS";
/// Neutral fallback score
pub const ENV_NEUTRAL_SCORE: &str = "NUTRISCAN_NEUTRAL_SCORE";
/// Per-serving sugar penalty cap in grams
pub const ENV_SUGAR_PENALTY_CAP_G: &str = "NUTRISCAN_SUGAR_PENALTY_CAP_G";
/// Sugar penalty weight
pub const ENV_SUGAR_WEIGHT: &str = "NUTRISCAN_SUGAR_WEIGHT";
/// Saturated fat penalty weight
pub const ENV_SAT_FAT_WEIGHT: &str = "NUTRISCAN_SAT_FAT_WEIGHT";
/// Sodium penalty weight
pub const ENV_SODIUM_WEIGHT: &str = "NUTRISCAN_SODIUM_WEIGHT";

/// Every variable read by [`EngineConfig::load`]
pub const ENV_VARS: [&str; 7] = [
    ENV_SCORE_V2,
    ENV_DEFAULT_PORTION_GRAMS,
    ENV_NEUTRAL_SCORE,
    ENV_SUGAR_PENALTY_CAP_G,
    ENV_SUGAR_WEIGHT,
    ENV_SAT_FAT_WEIGHT,
    ENV_SODIUM_WEIGHT,
];

static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Scoring and logging configuration for one process
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineConfig {
    /// Scorer configuration passed to every engine call
    pub scoring: ScoringConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once; a load failure is logged and the defaults are used.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting scoring configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let scoring = apply_env_overrides(ScoringConfig::default())?;
        scoring.validate()?;

        let config = Self {
            scoring,
            logging: LoggingConfig::from_env(),
        };
        info!(
            score_v2 = config.scoring.score_v2_enabled,
            default_portion_grams = config.scoring.default_portion_grams,
            sugar_penalty_cap_g = ?config.scoring.caps.sugar_penalty_g,
            "Engine configuration loaded"
        );
        Ok(config)
    }
}

/// Apply `NUTRISCAN_*` overrides on top of `config`
///
/// # Errors
///
/// Returns `ConfigError::Parse` naming the first variable that cannot be parsed
pub fn apply_env_overrides(mut config: ScoringConfig) -> Result<ScoringConfig, ConfigError> {
    if let Some(value) = env_value(ENV_SCORE_V2) {
        config.score_v2_enabled = parse_bool(ENV_SCORE_V2, &value)?;
    }

    if let Some(value) = env_value(ENV_DEFAULT_PORTION_GRAMS) {
        config.default_portion_grams = parse_number(ENV_DEFAULT_PORTION_GRAMS, &value)?;
    }

    if let Some(value) = env_value(ENV_NEUTRAL_SCORE) {
        config.neutral_score = parse_number(ENV_NEUTRAL_SCORE, &value)?;
    }

    if let Some(value) = env_value(ENV_SUGAR_PENALTY_CAP_G) {
        config.caps.sugar_penalty_g = if value.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(parse_number(ENV_SUGAR_PENALTY_CAP_G, &value)?)
        };
    }

    if let Some(value) = env_value(ENV_SUGAR_WEIGHT) {
        config.weights.sugar_penalty = parse_number(ENV_SUGAR_WEIGHT, &value)?;
    }

    if let Some(value) = env_value(ENV_SAT_FAT_WEIGHT) {
        config.weights.sat_fat_penalty = parse_number(ENV_SAT_FAT_WEIGHT, &value)?;
    }

    if let Some(value) = env_value(ENV_SODIUM_WEIGHT) {
        config.weights.sodium_penalty = parse_number(ENV_SODIUM_WEIGHT, &value)?;
    }

    Ok(config)
}

/// Trimmed, non-empty value of `key`
fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {value:?}")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Parse(format!("Invalid {key}: {value:?}"))),
    }
}
