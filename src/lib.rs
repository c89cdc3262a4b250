// ABOUTME: Main library entry point for the nutriscan food health engine
// ABOUTME: Re-exports the engines and adds logging, configuration, and the analysis pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![deny(unsafe_code)]

//! # Nutriscan
//!
//! Health scoring for packaged food. A raw nutrition payload from any food
//! data provider goes through three stateless engines:
//!
//! - **Canonicalizer**: provider keys and units to a fixed per-100g schema
//! - **Flagger**: ingredient and nutrition rule tables to health flags
//! - **Scorer**: weighted penalties and bonuses to an integer score in `[0, 100]`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriscan::analysis::{analyze_product, ProductAnalysisRequest};
//! use nutriscan::config::EngineConfig;
//! use nutriscan::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let request = ProductAnalysisRequest::from_json(
//!         r#"{"nutriments": {"energy-kcal_100g": 450, "sugars_100g": 12},
//!             "portionGrams": 45,
//!             "meta": {"category": "cereal"}}"#,
//!     )?;
//!     let analysis = analyze_product(&request, &EngineConfig::global().scoring);
//!     println!("score {} ({})", analysis.score, analysis.verdict);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Canonicalize, flag and score a product in one call
pub mod analysis;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use nutriscan_core::{constants, errors, models};
pub use nutriscan_intelligence as intelligence;
