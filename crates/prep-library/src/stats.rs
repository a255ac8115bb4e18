//! Summary statistics over the master collection.

use std::collections::BTreeMap;

use serde::Serialize;

use prep_model::{ContentType, Difficulty, Section};

use crate::collection::Library;

/// Shape summary of the collection, recomputed from scratch on each
/// call. The collection is immutable after construction, so there is
/// nothing to cache and nothing to go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    /// Count of all units; always equals the collection length and the
    /// sum of every bucket within any one breakdown.
    pub total: usize,
    /// Sparse: only sections that actually have units.
    pub by_section: BTreeMap<Section, usize>,
    /// Dense: every canonical content type, zero-filled.
    pub by_kind: BTreeMap<ContentType, usize>,
    /// Dense: every difficulty level, zero-filled.
    pub by_difficulty: BTreeMap<Difficulty, usize>,
}

impl Library {
    /// Scans the collection and produces fresh counts.
    pub fn stats(&self) -> LibraryStats {
        let mut by_section: BTreeMap<Section, usize> = BTreeMap::new();
        let mut by_kind: BTreeMap<ContentType, usize> =
            ContentType::ALL.iter().map(|kind| (*kind, 0)).collect();
        let mut by_difficulty: BTreeMap<Difficulty, usize> = Difficulty::ALL
            .iter()
            .map(|difficulty| (*difficulty, 0))
            .collect();

        for unit in self.units() {
            *by_section.entry(unit.section).or_insert(0) += 1;
            *by_kind.entry(unit.kind).or_insert(0) += 1;
            *by_difficulty.entry(unit.difficulty).or_insert(0) += 1;
        }

        LibraryStats {
            total: self.len(),
            by_section,
            by_kind,
            by_difficulty,
        }
    }
}
