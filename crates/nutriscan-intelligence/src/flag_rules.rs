// ABOUTME: Static rule tables for ingredient-text and nutrition-threshold health flags
// ABOUTME: Each rule pairs a deterministic test with a fixed flag; declaration order is evaluation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

//! Health flag rule tables
//!
//! Ingredient rules match lower-cased ingredient text with regular
//! expressions. Nutrition rules compare a per-100g snapshot against fixed
//! thresholds. Rules are independent: every rule that matches contributes its
//! flag, so `high_sodium` and `very_high_sodium` both fire at 1500 mg/100g.
//!
//! Artificial sweeteners are reported one flag per substance.

use nutriscan_core::models::{FlagSeverity, HealthFlag, NutritionThresholds};
use regex::Regex;
use std::sync::LazyLock;

/// Sugar threshold, g/100g
pub const HIGH_SUGAR_G_100G: f64 = 22.5;
/// Saturated fat threshold, g/100g
pub const HIGH_SATURATED_FAT_G_100G: f64 = 5.0;
/// Sodium threshold, mg/100g
pub const HIGH_SODIUM_MG_100G: f64 = 600.0;
/// Second sodium threshold, mg/100g
pub const VERY_HIGH_SODIUM_MG_100G: f64 = 1500.0;
/// Fiber at or below this is low, g/100g
pub const LOW_FIBER_G_100G: f64 = 2.0;
/// Fiber at or above this is high, g/100g
pub const HIGH_FIBER_G_100G: f64 = 6.0;
/// Protein at or above this is high, g/100g
pub const HIGH_PROTEIN_G_100G: f64 = 12.0;

/// Static flag payload attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagTemplate {
    /// Unique flag key
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Presentation severity
    pub severity: FlagSeverity,
    /// Longer explanation
    pub description: &'static str,
}

impl FlagTemplate {
    /// Materialize an owned flag
    #[must_use]
    pub fn to_flag(&self) -> HealthFlag {
        HealthFlag {
            key: self.key.to_owned(),
            label: self.label.to_owned(),
            severity: self.severity,
            description: Some(self.description.to_owned()),
        }
    }
}

/// Uncompiled ingredient rule
#[derive(Debug, Clone, Copy)]
pub struct IngredientRuleSpec {
    /// Regular expression matched against lower-cased ingredient text
    pub pattern: &'static str,
    /// Flag emitted on match
    pub flag: FlagTemplate,
}

/// Ingredient rules in evaluation order
pub const INGREDIENT_RULE_SPECS: &[IngredientRuleSpec] = &[
    IngredientRuleSpec {
        pattern: r"\baspartame\b|\be951\b",
        flag: FlagTemplate {
            key: "aspartame",
            label: "Aspartame",
            severity: FlagSeverity::Warning,
            description: "Artificial sweetener; avoid with phenylketonuria",
        },
    },
    IngredientRuleSpec {
        pattern: r"\bacesulfame(?:[\s-]*(?:k|potassium))?\b|\bace-k\b|\be950\b",
        flag: FlagTemplate {
            key: "acesulfame_k",
            label: "Acesulfame-K",
            severity: FlagSeverity::Warning,
            description: "Artificial sweetener",
        },
    },
    IngredientRuleSpec {
        pattern: r"\bsucralose\b|\be955\b",
        flag: FlagTemplate {
            key: "sucralose",
            label: "Sucralose",
            severity: FlagSeverity::Warning,
            description: "Artificial sweetener",
        },
    },
    IngredientRuleSpec {
        pattern: r"\bsaccharin\b|\be954\b",
        flag: FlagTemplate {
            key: "saccharin",
            label: "Saccharin",
            severity: FlagSeverity::Warning,
            description: "Artificial sweetener",
        },
    },
    IngredientRuleSpec {
        pattern: r"\bnitrites?\b|\bnitrates?\b|\be(?:249|250|251|252)\b",
        flag: FlagTemplate {
            key: "nitrites",
            label: "Nitrites/Nitrates",
            severity: FlagSeverity::Danger,
            description: "Curing agents linked to nitrosamine formation in processed meats",
        },
    },
    IngredientRuleSpec {
        pattern: r"\bfd&c\b|\b(?:red|yellow|blue|green)\s*(?:no\.?\s*)?\d{1,2}\b|\bartificial colou?rs?\b|\btartrazine\b|\ballura red\b|\bsunset yellow\b|\bbrilliant blue\b|\be1(?:02|04|10|22|24|29|33)\b",
        flag: FlagTemplate {
            key: "artificial_colors",
            label: "Artificial colors",
            severity: FlagSeverity::Warning,
            description: "Synthetic dyes such as Red 40, Yellow 5 or Blue 1",
        },
    },
    IngredientRuleSpec {
        pattern: r"partially[\s-]hydrogenated|\btrans[\s-]fats?\b",
        flag: FlagTemplate {
            key: "trans_fats",
            label: "Trans fats",
            severity: FlagSeverity::Danger,
            description: "Partially hydrogenated oils raise LDL cholesterol",
        },
    },
    IngredientRuleSpec {
        pattern: r"high[\s-]fructose corn syrup|\bhfcs\b|glucose-fructose syrup",
        flag: FlagTemplate {
            key: "high_fructose_corn_syrup",
            label: "High-fructose corn syrup",
            severity: FlagSeverity::Warning,
            description: "Highly refined added sugar",
        },
    },
    IngredientRuleSpec {
        pattern: r"monosodium glutamate|\bmsg\b|\be621\b",
        flag: FlagTemplate {
            key: "msg",
            label: "MSG",
            severity: FlagSeverity::Warning,
            description: "Flavor enhancer some people are sensitive to",
        },
    },
];

/// Compiled ingredient rule
#[derive(Debug)]
pub struct IngredientRule {
    /// Flag key
    pub key: &'static str,
    pattern: Regex,
    /// Flag emitted on match
    pub flag: FlagTemplate,
}

impl IngredientRule {
    /// Whether the rule matches already lower-cased text
    #[must_use]
    pub fn test(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Compiled ingredient rules, in declaration order
///
/// A pattern that fails to compile is logged and left out rather than
/// aborting detection.
pub static INGREDIENT_RULES: LazyLock<Vec<IngredientRule>> = LazyLock::new(|| {
    INGREDIENT_RULE_SPECS
        .iter()
        .filter_map(|spec| match Regex::new(spec.pattern) {
            Ok(pattern) => Some(IngredientRule {
                key: spec.flag.key,
                pattern,
                flag: spec.flag,
            }),
            Err(e) => {
                tracing::error!(rule = spec.flag.key, error = %e, "Invalid ingredient rule pattern");
                None
            }
        })
        .collect()
});

/// Nutrition threshold rule
#[derive(Debug, Clone, Copy)]
pub struct NutritionRule {
    /// Flag key
    pub key: &'static str,
    /// Threshold test; missing fields read as zero
    pub test: fn(&NutritionThresholds) -> bool,
    /// Flag emitted when the test passes
    pub flag: FlagTemplate,
}

#[inline]
fn value_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Nutrition rules in evaluation order
pub const NUTRITION_RULES: &[NutritionRule] = &[
    NutritionRule {
        key: "high_sugar",
        test: |n| value_or_zero(n.sugar_g_100g) >= HIGH_SUGAR_G_100G,
        flag: FlagTemplate {
            key: "high_sugar",
            label: "Sugar ≥22.5 g/100g",
            severity: FlagSeverity::Warning,
            description: "High in sugar per the UK front-of-pack threshold",
        },
    },
    NutritionRule {
        key: "high_saturated_fat",
        test: |n| value_or_zero(n.satfat_g_100g) >= HIGH_SATURATED_FAT_G_100G,
        flag: FlagTemplate {
            key: "high_saturated_fat",
            label: "Saturated fat ≥5 g/100g",
            severity: FlagSeverity::Warning,
            description: "High in saturated fat",
        },
    },
    NutritionRule {
        key: "high_sodium",
        test: |n| value_or_zero(n.sodium_mg_100g) >= HIGH_SODIUM_MG_100G,
        flag: FlagTemplate {
            key: "high_sodium",
            label: "Sodium ≥600 mg/100g",
            severity: FlagSeverity::Warning,
            description: "High in sodium",
        },
    },
    NutritionRule {
        key: "very_high_sodium",
        test: |n| value_or_zero(n.sodium_mg_100g) >= VERY_HIGH_SODIUM_MG_100G,
        flag: FlagTemplate {
            key: "very_high_sodium",
            label: "Sodium ≥1500 mg/100g",
            severity: FlagSeverity::Danger,
            description: "Very high in sodium",
        },
    },
    NutritionRule {
        key: "low_fiber",
        test: |n| value_or_zero(n.fiber_g_100g) <= LOW_FIBER_G_100G,
        flag: FlagTemplate {
            key: "low_fiber",
            label: "Fiber ≤2 g/100g",
            severity: FlagSeverity::Warning,
            description: "Low in dietary fiber",
        },
    },
    NutritionRule {
        key: "high_fiber",
        test: |n| value_or_zero(n.fiber_g_100g) >= HIGH_FIBER_G_100G,
        flag: FlagTemplate {
            key: "high_fiber",
            label: "Fiber ≥6 g/100g",
            severity: FlagSeverity::Good,
            description: "Good source of dietary fiber",
        },
    },
    NutritionRule {
        key: "high_protein",
        test: |n| value_or_zero(n.protein_g_100g) >= HIGH_PROTEIN_G_100G,
        flag: FlagTemplate {
            key: "high_protein",
            label: "Protein ≥12 g/100g",
            severity: FlagSeverity::Good,
            description: "Good source of protein",
        },
    },
];
