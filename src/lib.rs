// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Docent Catalog: museum artwork reference browser
//!
//! Loads the synced artwork export, classifies every record by medium and
//! subject, and filters/sorts the catalog the way the docent browse screens do.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod report;

pub use catalog::{ArtworkRecord, Catalog};
pub use classify::{
    classify_medium, classify_subject, Classification, Classifier, MediumCategory,
    SubjectCategory,
};
pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use filter::{ArtworkFilter, SortOrder};
