// ABOUTME: Re-exports command modules for nutriscan-cli
// ABOUTME: Product analysis/scoring and nutrition canonicalization/flag commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

pub mod nutrition;
pub mod product;
