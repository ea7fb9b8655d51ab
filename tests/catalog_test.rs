// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Loading catalog exports from disk and browsing them

use docent_catalog::catalog::cores::core_by_id;
use docent_catalog::report::{uncategorized, CategoryBreakdown};
use docent_catalog::{
    ArtworkFilter, Catalog, CatalogError, Classifier, MediumCategory, SortOrder, SubjectCategory,
};
use std::path::Path;
use tempfile::tempdir;

const EXPORT: &str = r#"{
  "artworks": [
    {
      "id": "101",
      "Accession Number": "1989.12",
      "Title": "The Poetry Reading",
      "Artist (Display)": "Harold Knight",
      "Collection": "American Painting & Sculpture 1800–1945",
      "On Display": true,
      "Date": "1915",
      "Medium": "Oil on canvas",
      "Gallery Location": "K213"
    },
    {
      "id": "102",
      "Accession Number": "1990.5",
      "Title": "Whaler off the Vineyard",
      "Collection": "American Painting and Sculpture Before 1800",
      "On Display": false,
      "Date": "1859",
      "Medium": "Watercolor and graphite on paper"
    },
    {
      "id": "103",
      "Accession Number": "2004.77",
      "Title": "Composition 1",
      "Collection": "Contemporary",
      "Date": "1962",
      "Medium": "Acrylic on canvas"
    },
    {
      "id": "104",
      "Accession Number": "2011.3",
      "Title": "Quiet Object",
      "Collection": "Contemporary",
      "On Display": true,
      "Medium": "Steel"
    }
  ],
  "meta": { "lastSync": "2025-01-01T00:00:00Z", "artworkCount": 4, "version": 1 }
}"#;

fn write_export(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("artworks.json");
    std::fs::write(&path, EXPORT).expect("Failed to write export");
    path
}

#[test]
fn test_load_missing_file() {
    let result = Catalog::load(Path::new("/nonexistent/path/artworks.json"));
    assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("artworks.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Json(_))));
}

#[test]
fn test_load_wrapped_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::load(&write_export(dir.path())).unwrap();
    assert_eq!(catalog.len(), 4);

    let reading = catalog.get("101").unwrap();
    assert_eq!(reading.artist.as_deref(), Some("Harold Knight"));
    assert_eq!(reading.medium_category(), MediumCategory::Oil);
    assert_eq!(reading.subject_category(), SubjectCategory::Genre);

    let whaler = catalog.get("102").unwrap();
    assert_eq!(whaler.medium_category(), MediumCategory::Watercolor);
    assert_eq!(whaler.subject_category(), SubjectCategory::Seascape);
}

#[test]
fn test_browse_core_on_display() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::load(&write_export(dir.path())).unwrap();

    let filter = ArtworkFilter {
        core: core_by_id("contemporary"),
        show_not_on_display: false,
        ..Default::default()
    };
    let result = filter.apply(&Classifier::new(), catalog.records());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["104"]);
}

#[test]
fn test_browse_by_date() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::load(&write_export(dir.path())).unwrap();

    let filter = ArtworkFilter {
        sort: SortOrder::Date,
        ..Default::default()
    };
    let result = filter.apply(&Classifier::new(), catalog.records());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["104", "102", "101", "103"]);
}

#[test]
fn test_audit_and_breakdown() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::load(&write_export(dir.path())).unwrap();
    let classifier = Classifier::new();

    let others = uncategorized(&classifier, catalog.records());
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].title, "Quiet Object");

    let breakdown = CategoryBreakdown::from_records(&classifier, catalog.records());
    assert_eq!(breakdown.total, 4);
    assert_eq!(breakdown.subject_count(SubjectCategory::Contemporary), 1);
    assert_eq!(breakdown.subject_count(SubjectCategory::Genre), 1);
    assert_eq!(breakdown.medium_count(MediumCategory::Other), 2);

    // an extra override removes the work from the audit
    let extended =
        Classifier::with_extra_overrides([("Quiet Object", SubjectCategory::Contemporary)]);
    assert!(uncategorized(&extended, catalog.records()).is_empty());
}
