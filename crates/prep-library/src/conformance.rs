//! Conformance checks over the aggregated collection.
//!
//! The closed enumerations are guaranteed by the type system; the one
//! invariant the types cannot express is id uniqueness across batches
//! that were authored independently. A collision is an authoring defect
//! to be caught before release, not at load time: the loader keeps
//! every unit and only warns, while `Library::verify` (run by tests and
//! the CLI `check` command) fails loudly.

use std::collections::BTreeMap;

use serde::Serialize;

use prep_model::{StudyUnit, Track};

use crate::collection::Library;
use crate::error::{LibraryError, Result};

/// Counts reported by a successful verification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConformanceSummary {
    pub total: usize,
    pub by_track: BTreeMap<Track, usize>,
}

/// Returns the ids that appear more than once, sorted, each listed once.
pub fn duplicate_ids(units: &[StudyUnit]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for unit in units {
        *counts.entry(unit.id.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

impl Library {
    /// Verifies the collection invariants that construction does not
    /// enforce. Fails on duplicate ids.
    pub fn verify(&self) -> Result<ConformanceSummary> {
        let ids = duplicate_ids(self.units());
        if !ids.is_empty() {
            return Err(LibraryError::DuplicateIds { ids });
        }
        let mut by_track: BTreeMap<Track, usize> = BTreeMap::new();
        for unit in self.units() {
            *by_track.entry(unit.track()).or_insert(0) += 1;
        }
        Ok(ConformanceSummary {
            total: self.len(),
            by_track,
        })
    }
}
