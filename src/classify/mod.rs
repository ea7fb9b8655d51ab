// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Artwork classification by medium and subject
//!
//! Both classifiers are total: every `(title, medium)` pair maps to exactly
//! one label per axis, with `other` as the fallback. Labels are recomputed on
//! every call and never cached, so edits to the override tables take effect
//! immediately.

mod overrides;
mod rules;

pub use overrides::OverrideTable;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Physical material or technique category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediumCategory {
    Oil,
    Watercolor,
    Sculpture,
    Pastel,
    Drawing,
    Print,
    Other,
}

impl MediumCategory {
    /// Every medium label, in the order the browse screens list them
    pub const ALL: [MediumCategory; 7] = [
        MediumCategory::Oil,
        MediumCategory::Watercolor,
        MediumCategory::Sculpture,
        MediumCategory::Pastel,
        MediumCategory::Drawing,
        MediumCategory::Print,
        MediumCategory::Other,
    ];

    /// Stable label string
    pub fn as_str(&self) -> &'static str {
        match self {
            MediumCategory::Oil => "oil",
            MediumCategory::Watercolor => "watercolor",
            MediumCategory::Sculpture => "sculpture",
            MediumCategory::Pastel => "pastel",
            MediumCategory::Drawing => "drawing",
            MediumCategory::Print => "print",
            MediumCategory::Other => "other",
        }
    }

    /// Human-readable name for listings
    pub fn display_name(&self) -> &'static str {
        match self {
            MediumCategory::Oil => "Oil Paintings",
            MediumCategory::Watercolor => "Watercolors",
            MediumCategory::Sculpture => "Sculpture",
            MediumCategory::Pastel => "Pastels",
            MediumCategory::Drawing => "Drawings",
            MediumCategory::Print => "Prints",
            MediumCategory::Other => "Other",
        }
    }
}

impl fmt::Display for MediumCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediumCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Coarse thematic category of what an artwork depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    Portrait,
    Landscape,
    Cityscape,
    Seascape,
    StillLife,
    Genre,
    Mythological,
    Sculpture,
    Contemporary,
    Other,
}

impl SubjectCategory {
    /// Every subject label, in the order the browse screens list them
    pub const ALL: [SubjectCategory; 10] = [
        SubjectCategory::Portrait,
        SubjectCategory::Landscape,
        SubjectCategory::Cityscape,
        SubjectCategory::Seascape,
        SubjectCategory::StillLife,
        SubjectCategory::Genre,
        SubjectCategory::Mythological,
        SubjectCategory::Sculpture,
        SubjectCategory::Contemporary,
        SubjectCategory::Other,
    ];

    /// Stable label string
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectCategory::Portrait => "portrait",
            SubjectCategory::Landscape => "landscape",
            SubjectCategory::Cityscape => "cityscape",
            SubjectCategory::Seascape => "seascape",
            SubjectCategory::StillLife => "stilllife",
            SubjectCategory::Genre => "genre",
            SubjectCategory::Mythological => "mythological",
            SubjectCategory::Sculpture => "sculpture",
            SubjectCategory::Contemporary => "contemporary",
            SubjectCategory::Other => "other",
        }
    }

    /// Human-readable name for listings
    pub fn display_name(&self) -> &'static str {
        match self {
            SubjectCategory::Portrait => "Portraits",
            SubjectCategory::Landscape => "Landscapes",
            SubjectCategory::Cityscape => "Cityscapes",
            SubjectCategory::Seascape => "Seascapes & Marine",
            SubjectCategory::StillLife => "Still Life",
            SubjectCategory::Genre => "Genre Scenes",
            SubjectCategory::Mythological => "Religious & Mythological",
            SubjectCategory::Sculpture => "Sculpture",
            SubjectCategory::Contemporary => "Contemporary & Abstract",
            SubjectCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SubjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Both labels for one artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub medium: MediumCategory,
    pub subject: SubjectCategory,
}

/// Subject/medium classifier holding the title override table
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    overrides: OverrideTable,
}

impl Classifier {
    /// Classifier with only the built-in override tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with extra title overrides layered under the built-in ones
    pub fn with_extra_overrides<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = (S, SubjectCategory)>,
        S: AsRef<str>,
    {
        Self {
            overrides: OverrideTable::with_extra(extra),
        }
    }

    /// The override table consulted before the pattern rules
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Categorize a free-text medium description
    pub fn medium(&self, medium: Option<&str>) -> MediumCategory {
        let m = match medium {
            Some(m) if !m.is_empty() => m.to_lowercase(),
            _ => return MediumCategory::Other,
        };
        rules::match_medium(&m).unwrap_or(MediumCategory::Other)
    }

    /// Categorize an artwork's subject from its title, falling back to the
    /// medium for untitled-looking sculpture
    pub fn subject(&self, title: Option<&str>, medium: Option<&str>) -> SubjectCategory {
        let t = match title {
            Some(t) if !t.is_empty() => normalize_title(t),
            _ => return SubjectCategory::Other,
        };

        if let Some(label) = self.overrides.get(&t) {
            return label;
        }

        if let Some(label) = rules::match_title(&t) {
            return label;
        }

        let m = medium.unwrap_or("").to_lowercase();
        if rules::is_sculpture_medium(&m) {
            return SubjectCategory::Sculpture;
        }

        SubjectCategory::Other
    }

    /// Both labels at once
    pub fn classify(&self, title: Option<&str>, medium: Option<&str>) -> Classification {
        Classification {
            medium: self.medium(medium),
            subject: self.subject(title, medium),
        }
    }
}

lazy_static! {
    static ref SHARED: Classifier = Classifier::default();
}

/// The built-in classifier shared by every call site
pub fn shared() -> &'static Classifier {
    &SHARED
}

/// Categorize a medium description with the built-in rules
pub fn classify_medium(medium: Option<&str>) -> MediumCategory {
    shared().medium(medium)
}

/// Categorize a subject with the built-in override tables and rules
pub fn classify_subject(title: Option<&str>, medium: Option<&str>) -> SubjectCategory {
    shared().subject(title, medium)
}

/// Lowercase a title and straighten curly single quotes.
///
/// Override table keys must be written in this form.
pub fn normalize_title(title: &str) -> String {
    title
        .replace(['\u{2018}', '\u{2019}'], "'")
        .to_lowercase()
}
