// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Curated title overrides
//!
//! Exact, full-title matches for works the pattern rules get wrong. Keys are
//! stored lowercased with straight apostrophes (see [`super::normalize_title`]).

use std::collections::HashMap;

use super::{normalize_title, SubjectCategory};

const CONTEMPORARY: &[&str] = &["composition 1"];

const GENRE_SCENES: &[&str] = &[
    "the poetry reading",
    "hotel lobby",
    "new year's shooter",
    "tidying up",
    "two disciples at the tomb (the kneeling disciple)",
    "preparing for the matinee",
    "hauptmann must die",
    "glow of gold, gleam of pearl",
    "herman and verman",
    "promenade",
    "reclining nude",
    "sunlight",
    "dolly & rach",
    "girl at the piano",
    "girl at the piano: recording sound",
    "he is risen",
    "reflections",
    "the artist's party",
    "the bacidae",
    "the blue tiger",
    "the boat builders",
    "the love song",
    "untitled (the birth)",
    "judith, or cowper's oak",
    "our flag",
    "concretion",
    "henry look unhitching",
    "new york, new haven and hartford",
    "streetlight",
    "the statuette",
    "the seiner (the net)",
    "a june idyll",
    "afternoon \u{2013} yellow room",
    "afternoon tea",
    "at the end of the porch",
    "eleanor",
    "girl sweeping",
    "harmony in pink and gray: lady meux",
    "his majesty receives",
    "ideal head",
    "joan of arc",
    "picking cotton",
    "poppies",
    "red kimono on the roof",
    "sleep",
    "wash day",
    "training for war",
    "the young artist",
    "sunlit window",
    "temptation",
    "the consecration",
    "the robe",
];

const SCULPTURES: &[&str] = &[
    "the mountain man",
    "gamin",
    "framed mirror",
    "bacchante and infant faun",
    "diana",
];

const CITYSCAPES: &[&str] = &[
    "harlem at night",
    "paris: h\u{f4}tel de ville",
    "rainy night, etaples",
    "venice: santa maria della salute from the grand canal",
    "venice: the rialto",
    "washington street, indianapolis at dusk",
    "dunstaffnage",
    "kenilworth castle",
    "monday morning",
    "san giorgio, verona",
    "the canal, morning effect",
    "west front, bath abbey",
    "worcester from the river severn",
    "cross at the entrance to hereford",
    "fontainebleau: the departure of napoleon",
    "king edgar's gate, worcester",
    "oberwesel on the rhine",
    "philae: a view of the temples from the south",
    "west window, worcester cathedral",
];

const LANDSCAPES: &[&str] = &[
    "bellinzona",
    "cliff rock\u{2014}appledore",
    "cliff rock - appledore",
    "fountains abbey, yorkshire",
    "glacier du rhone and the galenstock, from the furka pass road",
    "hurricane",
    "lock, long",
    "loch long",
    "martinswand, near innsbruck",
    "matlock",
    "pool in the adirondacks",
    "quarry at byram",
    "remagen, erpel and linz",
    "thames nocturne",
    "the marxburg",
    "the olive grove",
    "the pioneers",
    "the rainbow",
    "scene in indianapolis",
    "fall of the trees, yorkshire",
    "fall of the tees, yorkshire",
    "rosslyn castle",
];

const PORTRAITS: &[&str] = &[
    "dorothy",
    "indian girl",
    "little brown girl",
    "margaret mckittrick",
    "marianne ashley walker",
    "j. m. w. turner at a drawing table (recto), mrs. monro asleep (verso)",
    "the pianist (stanley addicks)",
    "study of a young woman",
    "george washington at princeton",
];

const STILL_LIFES: &[&str] = &["jimson weed"];

/// Built-in tables in lookup priority order
const BUILTIN: &[(SubjectCategory, &[&str])] = &[
    (SubjectCategory::Contemporary, CONTEMPORARY),
    (SubjectCategory::Genre, GENRE_SCENES),
    (SubjectCategory::Sculpture, SCULPTURES),
    (SubjectCategory::Cityscape, CITYSCAPES),
    (SubjectCategory::Landscape, LANDSCAPES),
    (SubjectCategory::Portrait, PORTRAITS),
    (SubjectCategory::StillLife, STILL_LIFES),
];

/// Normalized title -> subject label
#[derive(Debug, Clone)]
pub struct OverrideTable {
    entries: HashMap<String, SubjectCategory>,
    builtin_len: usize,
}

impl Default for OverrideTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        for (label, titles) in BUILTIN {
            for title in titles.iter() {
                // an earlier table keeps a title listed twice
                entries.entry((*title).to_string()).or_insert(*label);
            }
        }
        let builtin_len = entries.len();
        Self { entries, builtin_len }
    }
}

impl OverrideTable {
    /// Built-in tables plus extra entries; built-in entries win on conflict
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = (S, SubjectCategory)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (title, label) in extra {
            let key = normalize_title(title.as_ref());
            if key.trim().is_empty() {
                continue;
            }
            if let Some(existing) = table.entries.get(&key) {
                if *existing != label {
                    tracing::warn!(
                        "Ignoring override '{}' -> {}: already mapped to {}",
                        key, label, existing
                    );
                }
                continue;
            }
            table.entries.insert(key, label);
        }
        table
    }

    /// Look up an already-normalized title
    pub fn get(&self, normalized_title: &str) -> Option<SubjectCategory> {
        self.entries.get(normalized_title).copied()
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries added on top of the built-in tables
    pub fn extra_len(&self) -> usize {
        self.entries.len() - self.builtin_len
    }
}
