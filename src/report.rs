// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Category audits over a catalog

use serde::Serialize;

use crate::catalog::ArtworkRecord;
use crate::classify::{Classifier, MediumCategory, SubjectCategory};

/// Records whose subject falls through to `other`, ordered by title.
///
/// These are the candidates for new override entries.
pub fn uncategorized<'a>(
    classifier: &Classifier,
    records: &'a [ArtworkRecord],
) -> Vec<&'a ArtworkRecord> {
    let mut others: Vec<&ArtworkRecord> = records
        .iter()
        .filter(|r| r.classify_with(classifier).subject == SubjectCategory::Other)
        .collect();
    others.sort_by(|a, b| a.title.cmp(&b.title));
    others
}

/// Per-label counts on both axes
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub total: usize,
    /// Every medium label in enumeration order, zero counts included
    pub medium: Vec<(MediumCategory, usize)>,
    /// Every subject label in enumeration order, zero counts included
    pub subject: Vec<(SubjectCategory, usize)>,
}

impl CategoryBreakdown {
    pub fn from_records(classifier: &Classifier, records: &[ArtworkRecord]) -> Self {
        let mut medium: Vec<(MediumCategory, usize)> =
            MediumCategory::ALL.iter().map(|c| (*c, 0)).collect();
        let mut subject: Vec<(SubjectCategory, usize)> =
            SubjectCategory::ALL.iter().map(|c| (*c, 0)).collect();

        for record in records {
            let labels = record.classify_with(classifier);
            if let Some(slot) = medium.iter_mut().find(|(c, _)| *c == labels.medium) {
                slot.1 += 1;
            }
            if let Some(slot) = subject.iter_mut().find(|(c, _)| *c == labels.subject) {
                slot.1 += 1;
            }
        }

        Self {
            total: records.len(),
            medium,
            subject,
        }
    }

    pub fn medium_count(&self, category: MediumCategory) -> usize {
        self.medium
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn subject_count(&self, category: SubjectCategory) -> usize {
        self.subject
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, medium: Option<&str>) -> ArtworkRecord {
        ArtworkRecord {
            id: title.to_lowercase(),
            title: title.to_string(),
            medium: medium.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_uncategorized_sorted_by_title() {
        let records = vec![
            record("Zephyr", Some("Oil on canvas")),
            record("The Bacidae", Some("Oil on canvas")),
            record("Abstraction No. 4", None),
            record("Harbor at Dusk", Some("Oil on canvas")),
        ];
        let others = uncategorized(&Classifier::new(), &records);
        let titles: Vec<&str> = others.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Abstraction No. 4", "Zephyr"]);
    }

    #[test]
    fn test_breakdown_counts() {
        let records = vec![
            record("Mrs. Smith", Some("Oil on canvas")),
            record("Dr. Jones", Some("Oil on canvas")),
            record("Untitled Object", Some("Bronze")),
            record("", None),
        ];
        let breakdown = CategoryBreakdown::from_records(&Classifier::new(), &records);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.medium_count(MediumCategory::Oil), 2);
        assert_eq!(breakdown.medium_count(MediumCategory::Sculpture), 1);
        assert_eq!(breakdown.medium_count(MediumCategory::Other), 1);
        assert_eq!(breakdown.subject_count(SubjectCategory::Portrait), 2);
        assert_eq!(breakdown.subject_count(SubjectCategory::Sculpture), 1);
        assert_eq!(breakdown.subject_count(SubjectCategory::Other), 1);
        assert_eq!(breakdown.subject.len(), SubjectCategory::ALL.len());
        assert_eq!(breakdown.subject_count(SubjectCategory::Genre), 0);
    }
}
