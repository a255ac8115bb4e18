//! The canonical study unit.
//!
//! Every authored record, regardless of which certification track wrote
//! it, is normalized to this one shape before aggregation. Downstream
//! consumers may assume the invariants hold without re-validating:
//! `id` is unique within the master collection, and `section`, `kind`
//! and `difficulty` are members of their closed enumerations.

use serde::{Deserialize, Serialize};

use crate::enums::{ContentType, Difficulty, Section};

/// Structured side-by-side comparison payload, the only nested
/// structured field on a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub item_a: String,
    pub item_b: String,
    pub differences: Vec<String>,
}

/// One canonical flashcard/study item.
///
/// `front`/`back` and the supplementary payload fields are opaque
/// text/markup; this layer never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyUnit {
    /// Globally unique id, carried through adapters unchanged so the
    /// original authored record is always traceable.
    pub id: String,
    pub section: Section,
    pub kind: ContentType,
    /// Primary subject label.
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<String>,
    /// Exam-content-outline area within the section (e.g. "FAR-III").
    /// A label only, not a first-class entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_area: Option<String>,
    pub front: String,
    pub back: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Citation (standard, code section, framework reference).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl StudyUnit {
    /// Returns the track that authored this unit.
    pub fn track(&self) -> crate::enums::Track {
        self.section.track()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Track;

    fn sample_unit() -> StudyUnit {
        StudyUnit {
            id: "far-wc-fc-001".to_string(),
            section: Section::Far,
            kind: ContentType::Concept,
            topic: "Revenue Recognition".to_string(),
            subtopic: Some("ASC 606 5-Step Model".to_string()),
            blueprint_area: Some("FAR-III".to_string()),
            front: "What are the 5 steps of ASC 606 revenue recognition?".to_string(),
            back: "Identify the contract, identify performance obligations, determine \
                   the transaction price, allocate it, recognize revenue as each \
                   obligation is satisfied."
                .to_string(),
            example: None,
            formula: None,
            mnemonic: Some("I-I-D-A-R".to_string()),
            comparison: None,
            difficulty: Difficulty::Medium,
            tags: vec!["ASC 606".to_string(), "revenue".to_string()],
            reference: Some("ASC 606-10-25".to_string()),
        }
    }

    #[test]
    fn unit_serializes_camel_case() {
        let json = serde_json::to_value(sample_unit()).expect("serialize unit");
        assert_eq!(json["section"], "FAR");
        assert_eq!(json["kind"], "concept");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["blueprintArea"], "FAR-III");
        assert!(json.get("example").is_none());
    }

    #[test]
    fn unit_roundtrips() {
        let unit = sample_unit();
        let json = serde_json::to_string(&unit).expect("serialize unit");
        let round: StudyUnit = serde_json::from_str(&json).expect("deserialize unit");
        assert_eq!(round, unit);
    }

    #[test]
    fn unit_track_follows_section() {
        assert_eq!(sample_unit().track(), Track::Cpa);
    }
}
