// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for the docent catalog
//!
//! Classification itself never fails. These errors come from loading the
//! catalog export and the config file, or from parsing user-supplied
//! category and core names at the CLI boundary.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown core: {0}")]
    UnknownCore(String),
}
