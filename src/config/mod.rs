// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for the docent catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::classify::{Classifier, SubjectCategory};
use crate::filter::SortOrder;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Catalog export settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Browse defaults
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    /// Synced artwork export used when no path is given on the command line
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BrowseConfig {
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default = "default_true")]
    pub show_on_display: bool,
    #[serde(default = "default_true")]
    pub show_not_on_display: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ClassifierConfig {
    /// Extra title -> subject overrides, consulted after the built-in tables
    #[serde(default)]
    pub overrides: BTreeMap<String, SubjectCategory>,
}

// Default value functions
fn default_catalog_path() -> String { "public/data/artworks.json".to_string() }
fn default_true() -> bool { true }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            show_on_display: true,
            show_not_on_display: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| crate::CatalogError::Config(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Classifier with the configured overrides layered under the built-in tables
    pub fn classifier(&self) -> Classifier {
        if self.classifier.overrides.is_empty() {
            return Classifier::new();
        }
        Classifier::with_extra_overrides(
            self.classifier
                .overrides
                .iter()
                .map(|(title, label)| (title.as_str(), *label)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.catalog.path, "public/data/artworks.json");
        assert_eq!(config.browse.sort, SortOrder::TitleAsc);
        assert!(config.browse.show_on_display);
        assert!(config.classifier.overrides.is_empty());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "browse": { "sort": "date", "show_not_on_display": false },
                "classifier": { "overrides": { "Evening Bells": "genre" } }
            }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.browse.sort, SortOrder::Date);
        assert!(config.browse.show_on_display);
        assert!(!config.browse.show_not_on_display);
        assert_eq!(config.catalog.path, "public/data/artworks.json");

        let classifier = config.classifier();
        assert_eq!(classifier.subject(Some("Evening Bells"), None), SubjectCategory::Genre);
        assert_eq!(classifier.overrides().extra_len(), 1);
    }

    #[test]
    fn test_unknown_label_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"classifier": {"overrides": {"x": "figures"}}}"#).unwrap();
        assert!(matches!(AppConfig::load(&path), Err(crate::CatalogError::Config(_))));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = AppConfig::default();
        config.catalog.path = "exports/artworks.json".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.catalog.path, "exports/artworks.json");
    }
}
