// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Read-only artwork catalog loaded from the synced JSON export

pub mod cores;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::classify::{self, Classification, Classifier, MediumCategory, SubjectCategory};
use crate::{CatalogError, Result};

/// One artwork as exported from the catalog store
///
/// Field names follow the export's column headings. Columns this crate
/// does not use are dropped on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(rename = "Accession Number", default)]
    pub accession_number: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Artist (Display)", default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(rename = "Collection", default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    #[serde(rename = "On Display", default, skip_serializing_if = "Option::is_none")]
    pub on_display: Option<bool>,

    #[serde(rename = "Date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(rename = "Medium", default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(rename = "Gallery Location", default, skip_serializing_if = "Option::is_none")]
    pub gallery_location: Option<String>,

    #[serde(rename = "Artwork Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Micro Summary", default, skip_serializing_if = "Option::is_none")]
    pub micro_summary: Option<String>,
}

/// Exports carry numeric IDs from the store and string IDs once synced.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

impl ArtworkRecord {
    /// Medium label from the shared classifier
    pub fn medium_category(&self) -> MediumCategory {
        classify::classify_medium(self.medium.as_deref())
    }

    /// Subject label from the shared classifier
    pub fn subject_category(&self) -> SubjectCategory {
        classify::classify_subject(Some(self.title.as_str()), self.medium.as_deref())
    }

    /// Both labels from a specific classifier
    pub fn classify_with(&self, classifier: &Classifier) -> Classification {
        classifier.classify(Some(self.title.as_str()), self.medium.as_deref())
    }

    /// Records without the flag count as not on display
    pub fn is_on_display(&self) -> bool {
        self.on_display == Some(true)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExportShape {
    List(Vec<ArtworkRecord>),
    Wrapped { artworks: Vec<ArtworkRecord> },
}

#[derive(Deserialize)]
struct WrappedExport {
    artworks: Vec<ArtworkRecord>,
}

/// In-memory list of artwork records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ArtworkRecord>,
}

impl Catalog {
    /// Load an export: either a bare JSON array or `{"artworks": [...]}`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!("Loaded {} artworks from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse an export from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let records = match serde_json::from_str::<ExportShape>(content) {
            Ok(ExportShape::List(records)) => records,
            Ok(ExportShape::Wrapped { artworks }) => artworks,
            // untagged errors are opaque; reparse as the shape the input looks like
            Err(_) if content.trim_start().starts_with('{') => {
                serde_json::from_str::<WrappedExport>(content)?.artworks
            }
            Err(_) => serde_json::from_str::<Vec<ArtworkRecord>>(content)?,
        };
        Ok(Self::from_records(records))
    }

    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<ArtworkRecord>) -> Self {
        Self { records }
    }

    /// All records in export order
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&ArtworkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"[
        {
            "id": "17",
            "Accession Number": "1923.41",
            "Title": "The Flight of Europa",
            "Artist (Display)": "Paul Manship",
            "Collection": "American Painting & Sculpture 1800–1945",
            "On Display": true,
            "Medium": "Gilded bronze on marble base",
            "Dimensions": "not used"
        },
        {
            "id": 18,
            "Title": "Untitled Object"
        }
    ]"#;

    #[test]
    fn test_from_json_list() {
        let catalog = Catalog::from_json(EXPORT).unwrap();
        assert_eq!(catalog.len(), 2);

        let europa = catalog.get("17").unwrap();
        assert_eq!(europa.accession_number, "1923.41");
        assert!(europa.is_on_display());
        assert_eq!(europa.medium_category(), MediumCategory::Sculpture);
        assert_eq!(europa.subject_category(), SubjectCategory::Mythological);

        let untitled = catalog.get("18").unwrap();
        assert!(!untitled.is_on_display());
        assert_eq!(untitled.medium_category(), MediumCategory::Other);
        assert_eq!(untitled.subject_category(), SubjectCategory::Other);
    }

    #[test]
    fn test_from_json_wrapped() {
        let wrapped = format!(r#"{{"artworks": {}, "meta": null}}"#, EXPORT);
        let catalog = Catalog::from_json(&wrapped).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Catalog::from_json(r#"[{"Title": "no id"}]"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_from_json_wrapped_reports_record_error() {
        let wrapped = r#"{"artworks": [{"id": "1", "Title": 42}]}"#;
        match Catalog::from_json(wrapped) {
            Err(CatalogError::Json(e)) => {
                let message = e.to_string();
                assert!(!message.contains("expected a sequence"), "{}", message);
                assert!(message.contains("invalid type: integer"), "{}", message);
            }
            other => panic!("Expected Json error, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_classify_with_custom_classifier() {
        let classifier = Classifier::with_extra_overrides([("untitled object", SubjectCategory::Contemporary)]);
        let catalog = Catalog::from_json(EXPORT).unwrap();
        let labels = catalog.get("18").unwrap().classify_with(&classifier);
        assert_eq!(labels.subject, SubjectCategory::Contemporary);
        assert_eq!(labels.medium, MediumCategory::Other);
    }
}
