//! Pure filter operations over the master collection.
//!
//! Every operation is closed over "sequence of units in, fresh vec of
//! units out", so callers compose them by sequential application. No
//! operation ever mutates the collection or returns an error: an
//! unknown or unmatched value yields an empty vec.

use prep_model::{ContentType, Difficulty, Section, StudyUnit};

use crate::collection::Library;

/// Units belonging to one section, in original relative order.
pub fn by_section<'a, I>(units: I, section: Section) -> Vec<&'a StudyUnit>
where
    I: IntoIterator<Item = &'a StudyUnit>,
{
    units
        .into_iter()
        .filter(|unit| unit.section == section)
        .collect()
}

/// Units of one canonical content type, in original relative order.
pub fn by_kind<'a, I>(units: I, kind: ContentType) -> Vec<&'a StudyUnit>
where
    I: IntoIterator<Item = &'a StudyUnit>,
{
    units.into_iter().filter(|unit| unit.kind == kind).collect()
}

/// Units of one difficulty, in original relative order.
pub fn by_difficulty<'a, I>(units: I, difficulty: Difficulty) -> Vec<&'a StudyUnit>
where
    I: IntoIterator<Item = &'a StudyUnit>,
{
    units
        .into_iter()
        .filter(|unit| unit.difficulty == difficulty)
        .collect()
}

/// Units labeled with one blueprint area, in original relative order.
/// Units without an area label never match.
pub fn by_blueprint_area<'a, I>(units: I, area: &str) -> Vec<&'a StudyUnit>
where
    I: IntoIterator<Item = &'a StudyUnit>,
{
    units
        .into_iter()
        .filter(|unit| unit.blueprint_area.as_deref() == Some(area))
        .collect()
}

impl Library {
    pub fn by_section(&self, section: Section) -> Vec<&StudyUnit> {
        by_section(self.units(), section)
    }

    pub fn by_kind(&self, kind: ContentType) -> Vec<&StudyUnit> {
        by_kind(self.units(), kind)
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&StudyUnit> {
        by_difficulty(self.units(), difficulty)
    }

    pub fn by_blueprint_area(&self, area: &str) -> Vec<&StudyUnit> {
        by_blueprint_area(self.units(), area)
    }
}
