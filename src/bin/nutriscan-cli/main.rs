// ABOUTME: nutriscan-cli - command-line front end for the food health engines
// ABOUTME: Analyze, canonicalize, flag, and score products from JSON files or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors
//!
//! Usage:
//! ```bash
//! # Full analysis of a provider product (nutriments, ingredients, portion, meta)
//! nutriscan-cli analyze --file product.json
//!
//! # Canonical per-100g nutrition, plus per-serving values for 45 g
//! nutriscan-cli canonicalize --file nutriments.json --grams 45
//!
//! # Health flags from ingredient text and a nutrition payload
//! nutriscan-cli flags --ingredients "sugar, aspartame, red 40" --file nutriments.json
//!
//! # Score a prepared scoring input
//! nutriscan-cli score --file scoring_input.json
//!
//! # Read from stdin
//! cat product.json | nutriscan-cli analyze --file -
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriscan::config::EngineConfig;
use nutriscan::errors::{AppError, AppResult};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriscan-cli",
    about = "Food health scoring CLI",
    long_about = "Canonicalize provider nutrition payloads, detect health flags, and compute a 0-100 health score."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Canonicalize, flag, and score a product
    Analyze {
        /// Product JSON file (`-` for stdin)
        #[arg(long)]
        file: PathBuf,

        /// Portion override in grams
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Map a raw nutrition payload to canonical per-100g values
    Canonicalize {
        /// Nutrition JSON file (`-` for stdin)
        #[arg(long)]
        file: PathBuf,

        /// Also derive per-serving values for this many grams
        #[arg(long)]
        grams: Option<f64>,
    },

    /// Detect health flags
    Flags {
        /// Ingredient list text
        #[arg(long)]
        ingredients: Option<String>,

        /// Raw per-100g nutrition JSON file for threshold flags (`-` for stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Score a prepared scoring input (per100g, perServing, meta, flags)
    Score {
        /// Scoring input JSON file (`-` for stdin)
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let engine = EngineConfig::load().map_err(|e| {
        AppError::config(format!("Invalid NUTRISCAN_* environment: {e}")).with_source(e)
    })?;

    let level = if cli.verbose { "debug" } else { "warn" };
    engine
        .logging
        .clone()
        .with_level(level)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = &engine.scoring;
    debug!(score_v2 = config.score_v2_enabled, "nutriscan-cli starting");

    match cli.command {
        Command::Analyze { file, grams } => commands::product::analyze(&file, grams, config),
        Command::Canonicalize { file, grams } => commands::nutrition::canonicalize(&file, grams),
        Command::Flags { ingredients, file } => {
            commands::nutrition::flags(ingredients.as_deref(), file.as_deref())
        }
        Command::Score { file } => commands::product::score(&file, config),
    }
}
