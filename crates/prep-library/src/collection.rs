//! Aggregation of authored batches into the master collection.

use std::sync::OnceLock;

use tracing::{info, warn};

use prep_model::{StudyUnit, Track};
use prep_transform::{adapt_cfp, adapt_cia, adapt_ea};

use crate::conformance::duplicate_ids;

/// The master collection: every study unit from every track, in
/// aggregation order. Immutable once built.
#[derive(Debug, Clone)]
pub struct Library {
    units: Vec<StudyUnit>,
}

impl Library {
    /// Concatenates independently authored canonical batches into one
    /// ordered collection. Pure: no dedup, no drops, no reordering
    /// within or across batches.
    pub fn assemble(batches: Vec<Vec<StudyUnit>>) -> Library {
        let units: Vec<StudyUnit> = batches.into_iter().flatten().collect();
        Library { units }
    }

    /// Builds the collection from the authored content: the natively
    /// canonical CPA batches first, then each adapted track in
    /// registration order (CIA, EA, CFP).
    pub fn from_authored_content() -> Library {
        let mut batches = prep_content::cpa::batches();
        batches.push(adapt_cia(&prep_content::cia::cards()));
        batches.push(adapt_ea(&prep_content::ea::cards()));
        batches.push(adapt_cfp(&prep_content::cfp::cards()));
        Library::assemble(batches)
    }

    /// Every unit, in aggregation order.
    pub fn units(&self) -> &[StudyUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units contributed by one track, in aggregation order.
    pub fn track_units(&self, track: Track) -> Vec<&StudyUnit> {
        self.units
            .iter()
            .filter(|unit| unit.track() == track)
            .collect()
    }
}

static LIBRARY: OnceLock<Library> = OnceLock::new();

/// The process-wide library, built on first call and the same immutable
/// instance thereafter. Construction never fails and never drops
/// content; duplicate ids are logged as authoring defects (see
/// `Library::verify`).
pub fn library() -> &'static Library {
    LIBRARY.get_or_init(|| {
        let library = Library::from_authored_content();
        for track in Track::ALL {
            info!(
                track = track.as_str(),
                units = library.track_units(track).len(),
                "loaded track content"
            );
        }
        for id in duplicate_ids(library.units()) {
            warn!(%id, "duplicate study unit id across batches");
        }
        library
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_model::Section;

    #[test]
    fn assemble_preserves_batch_order() {
        let batches = prep_content::cpa::batches();
        let flat: Vec<String> = batches
            .iter()
            .flatten()
            .map(|unit| unit.id.clone())
            .collect();
        let library = Library::assemble(batches);
        let ids: Vec<String> = library.units().iter().map(|unit| unit.id.clone()).collect();
        assert_eq!(ids, flat);
    }

    #[test]
    fn assemble_of_nothing_is_empty() {
        let library = Library::assemble(Vec::new());
        assert!(library.is_empty());
    }

    #[test]
    fn registry_returns_same_instance() {
        let first = library();
        let second = library();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn every_track_contributes_units() {
        let library = library();
        for track in Track::ALL {
            assert!(
                !library.track_units(track).is_empty(),
                "track {track} has no units"
            );
        }
    }

    #[test]
    fn cfp_units_come_from_the_cfp_adapter() {
        let library = library();
        assert!(
            library
                .track_units(Track::Cfp)
                .iter()
                .all(|unit| unit.section == Section::Cfp)
        );
    }
}
