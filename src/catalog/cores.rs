// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Docent cores and the collections each one covers

use serde::Serialize;

use super::ArtworkRecord;

/// A docent training core
#[derive(Debug, Clone, Serialize)]
pub struct Core {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub badge: &'static str,
    pub collections: &'static [&'static str],
    pub description: &'static str,
}

impl Core {
    /// A core is active once at least one collection is assigned to it
    pub fn is_active(&self) -> bool {
        !self.collections.is_empty()
    }

    /// Whether the record's collection belongs to this core
    pub fn contains(&self, record: &ArtworkRecord) -> bool {
        record
            .collection
            .as_deref()
            .is_some_and(|c| self.collections.iter().any(|name| *name == c))
    }
}

// Both spellings of the American collections occur in the export.
const CORES: &[Core] = &[
    Core {
        id: "american",
        name: "american-core",
        display_name: "American Core",
        badge: "/images/badges/american-core.png",
        collections: &[
            "American Painting & Sculpture 1800\u{2013}1945",
            "American Painting & Sculpture Before 1800",
            "American Painting and Sculpture 1800-1945",
            "American Painting and Sculpture Before 1800",
        ],
        description: "American art from colonial times through the mid-20th century",
    },
    Core {
        id: "contemporary",
        name: "contemporary-core",
        display_name: "Contemporary Core",
        badge: "/images/badges/contemporary-core.png",
        collections: &["Contemporary"],
        description: "Contemporary art from the late 20th century to present",
    },
    Core {
        id: "african",
        name: "african-core",
        display_name: "African Core",
        badge: "/images/badges/african-core.png",
        collections: &[],
        description: "African art and cultural artifacts",
    },
    Core {
        id: "asian",
        name: "asian-core",
        display_name: "Asian Core",
        badge: "/images/badges/asian-core.png",
        collections: &[],
        description: "Asian art and cultural heritage",
    },
    Core {
        id: "design-decorative",
        name: "design-decorative-core",
        display_name: "Design & Decorative Arts Core",
        badge: "/images/badges/design-decorative-core.png",
        collections: &[],
        description: "Design, decorative arts, and functional objects",
    },
    Core {
        id: "european",
        name: "european-core",
        display_name: "European Core",
        badge: "/images/badges/european-core.png",
        collections: &[],
        description: "European art from medieval to modern periods",
    },
];

/// Every core, active or not
pub fn all_cores() -> &'static [Core] {
    CORES
}

/// Look up a core by its id (e.g. `american`)
pub fn core_by_id(id: &str) -> Option<&'static Core> {
    CORES.iter().find(|c| c.id == id)
}

/// The core a collection belongs to, if any
pub fn core_by_collection(collection: &str) -> Option<&'static Core> {
    CORES
        .iter()
        .find(|c| c.collections.iter().any(|name| *name == collection))
}

/// Cores that currently have collections
pub fn active_cores() -> Vec<&'static Core> {
    CORES.iter().filter(|c| c.is_active()).collect()
}
