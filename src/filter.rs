// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Browse filters and sorting over catalog records

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::cores::Core;
use crate::catalog::ArtworkRecord;
use crate::classify::{Classifier, MediumCategory, SubjectCategory};
use crate::CatalogError;

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    TitleAsc,
    TitleDesc,
    Date,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
            SortOrder::Date => "date",
        }
    }

    fn compare(&self, a: &ArtworkRecord, b: &ArtworkRecord) -> Ordering {
        match self {
            SortOrder::TitleAsc => compare_titles(a, b),
            SortOrder::TitleDesc => compare_titles(b, a),
            SortOrder::Date => a
                .date
                .as_deref()
                .unwrap_or("")
                .cmp(b.date.as_deref().unwrap_or("")),
        }
    }
}

/// Case-insensitive, so "the ..." sorts before "Zephyr"
fn compare_titles(a: &ArtworkRecord, b: &ArtworkRecord) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title-asc" => Ok(SortOrder::TitleAsc),
            "title-desc" => Ok(SortOrder::TitleDesc),
            "date" => Ok(SortOrder::Date),
            _ => Err(CatalogError::Config(format!("Unknown sort order: {}", s))),
        }
    }
}

/// Every predicate a browse screen can apply
#[derive(Debug, Clone)]
pub struct ArtworkFilter {
    /// Substring over title, artist, accession number and description
    pub search: Option<String>,
    /// Exact collection name
    pub collection: Option<String>,
    /// Restrict to the collections of one core
    pub core: Option<&'static Core>,
    pub medium: Option<MediumCategory>,
    pub subject: Option<SubjectCategory>,
    /// Substring of the gallery location
    pub gallery_location: Option<String>,
    pub show_on_display: bool,
    pub show_not_on_display: bool,
    pub sort: SortOrder,
}

impl Default for ArtworkFilter {
    fn default() -> Self {
        Self {
            search: None,
            collection: None,
            core: None,
            medium: None,
            subject: None,
            gallery_location: None,
            show_on_display: true,
            show_not_on_display: true,
            sort: SortOrder::default(),
        }
    }
}

impl ArtworkFilter {
    /// Filter then sort. The sort is stable, so ties keep catalog order.
    pub fn apply<'a>(
        &self,
        classifier: &Classifier,
        records: &'a [ArtworkRecord],
    ) -> Vec<&'a ArtworkRecord> {
        let search = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        let location = self
            .gallery_location
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        let mut matched: Vec<&ArtworkRecord> = records
            .iter()
            .filter(|r| search.as_deref().map_or(true, |q| matches_search(r, q)))
            .filter(|r| {
                self.collection
                    .as_deref()
                    .map_or(true, |c| r.collection.as_deref() == Some(c))
            })
            .filter(|r| self.core.map_or(true, |core| core.contains(r)))
            .filter(|r| {
                self.medium
                    .map_or(true, |m| classifier.medium(r.medium.as_deref()) == m)
            })
            .filter(|r| {
                self.subject.map_or(true, |s| {
                    classifier.subject(Some(r.title.as_str()), r.medium.as_deref()) == s
                })
            })
            .filter(|r| {
                location.as_deref().map_or(true, |loc| {
                    r.gallery_location
                        .as_deref()
                        .is_some_and(|g| g.to_lowercase().contains(loc))
                })
            })
            .filter(|r| {
                if r.is_on_display() {
                    self.show_on_display
                } else {
                    self.show_not_on_display
                }
            })
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        tracing::debug!("Filter matched {} of {} records", matched.len(), records.len());
        matched
    }
}

fn matches_search(record: &ArtworkRecord, query: &str) -> bool {
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(query));

    contains(Some(record.title.as_str()))
        || contains(record.artist.as_deref())
        || contains(Some(record.accession_number.as_str()))
        || contains(record.description.as_deref())
}
