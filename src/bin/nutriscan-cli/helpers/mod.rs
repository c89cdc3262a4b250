// ABOUTME: Input and output helpers shared by nutriscan-cli commands
// ABOUTME: Reads JSON from a file or stdin and prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriscan Contributors

use nutriscan::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a whole file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_resource_id(path.display().to_string())
    })
}

/// Read and parse JSON input
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = read_input(path)?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
