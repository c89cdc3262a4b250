// ABOUTME: Configuration module for the nutriscan library and command-line tool
// ABOUTME: Environment-driven engine configuration layered over scoring defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

/// Environment variable overrides and the process-wide configuration
pub mod environment;

pub use environment::EngineConfig;
pub use nutriscan_intelligence::config::{ConfigError, ScoringConfig};
