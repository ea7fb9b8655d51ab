// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Ordered keyword rules. All inputs are already lowercased; the first rule
//! that matches wins, so the order of each table is significant.

use lazy_static::lazy_static;
use regex::Regex;

use super::{MediumCategory, SubjectCategory};

const MEDIUM_RULES: &[(MediumCategory, &[&str])] = &[
    (MediumCategory::Oil, &["oil"]),
    (MediumCategory::Watercolor, &["watercolor"]),
    (
        MediumCategory::Sculpture,
        &["bronze", "marble", "sculpture", "plaster", "terra"],
    ),
    (MediumCategory::Pastel, &["pastel"]),
    (
        MediumCategory::Drawing,
        &["charcoal", "pencil", "drawing", "graphite", "chalk"],
    ),
    (
        MediumCategory::Print,
        &["print", "etching", "lithograph", "engraving"],
    ),
];

const PORTRAIT_KEYWORDS: &[&str] = &["portrait", "self-portrait"];

// Seascape runs before landscape: "river bay" is a seascape.
const TITLE_RULES: &[(SubjectCategory, &[&str])] = &[
    (
        SubjectCategory::Seascape,
        &[
            "sea", "coast", "harbor", "ship", "marine", "beach", "ocean", "bay", "fishing",
            "whaler", "sail", "vessel",
        ],
    ),
    (
        SubjectCategory::Landscape,
        &[
            "landscape", "mountain", "valley", "river", "lake", "forest", "sunrise", "sunset",
            "morning", "evening", "autumn", "winter", "spring", "summer", "cloud", "storm",
            "snow", "meadow", "hill", "creek", "ruins", "grove", "pool", "quarry", "abbey",
            "castle",
        ],
    ),
    (
        SubjectCategory::StillLife,
        &["still life", "flower", "fruit", "melon", "vase", "bouquet"],
    ),
    (
        SubjectCategory::Mythological,
        &[
            "angel", "christ", "madonna", "resurrection", "venus", "bacch", "europa", "calypso",
            "nymph", "apollo", "diana",
        ],
    ),
];

const SCULPTURE_MEDIUM_KEYWORDS: &[&str] = &["bronze", "marble", "sculpture"];

lazy_static! {
    static ref HONORIFIC_RE: Regex =
        // ASCII word boundary: "mrá" still reads as an honorific
        Regex::new(r"^(?:mrs|mr|miss|dr|colonel|madame|mme)(?-u:\b)").unwrap();
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

pub(super) fn match_medium(medium: &str) -> Option<MediumCategory> {
    MEDIUM_RULES
        .iter()
        .find(|(_, keywords)| contains_any(medium, keywords))
        .map(|(label, _)| *label)
}

pub(super) fn is_portrait(title: &str) -> bool {
    contains_any(title, PORTRAIT_KEYWORDS) || HONORIFIC_RE.is_match(title)
}

pub(super) fn match_title(title: &str) -> Option<SubjectCategory> {
    if is_portrait(title) {
        return Some(SubjectCategory::Portrait);
    }
    TITLE_RULES
        .iter()
        .find(|(_, keywords)| contains_any(title, keywords))
        .map(|(label, _)| *label)
}

pub(super) fn is_sculpture_medium(medium: &str) -> bool {
    contains_any(medium, SCULPTURE_MEDIUM_KEYWORDS)
}
