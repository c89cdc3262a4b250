// ABOUTME: Health flag and verdict models returned to callers for rendering
// ABOUTME: HealthFlag, FlagSeverity, and QualityVerdict definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use crate::constants::score::{EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MODERATE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a flag should be presented
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    /// Beneficial property (e.g. high fiber)
    Good,
    /// Worth attention
    Warning,
    /// Ingredient or level to avoid
    Danger,
}

impl FlagSeverity {
    /// Lower-case name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for FlagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected ingredient or nutrition property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFlag {
    /// Unique identifier, e.g. `high_sodium`
    pub key: String,
    /// Human-readable label
    pub label: String,
    /// Presentation severity
    pub severity: FlagSeverity,
    /// Longer explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Overall verdict stored next to a quality score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QualityVerdict {
    /// Score 80 and above
    Excellent,
    /// Score 70-79
    Good,
    /// Score 50-69
    Moderate,
    /// Below 50
    Poor,
}

impl QualityVerdict {
    /// Map a 0-100 score to its verdict
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    /// Lower-case name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for QualityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
