// ABOUTME: Core types and constants for the nutriscan food health engine
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

#![deny(unsafe_code)]

//! # Nutriscan Core
//!
//! Foundation crate providing shared types and constants for the food health
//! engine. The scoring crate and the application crate both depend on it, so
//! it is kept small and free of behavior beyond simple conversions.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, telemetry tags and score bounds
//! - **models**: Canonical nutrition, scoring inputs and health flags

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Nutrition data models shared by the engines and their callers
pub mod models;
