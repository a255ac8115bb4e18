//! EA (Enrolled Agent / IRS Special Enrollment Examination) native
//! records and adapter.
//!
//! The EA track authors against the SEE parts with the finest-grained
//! kind vocabulary of any track: beyond the shared kinds it has
//! `threshold` (a statutory dollar limit) and `penalty` (a sanction
//! amount or rate). Both state what the tax law prescribes, so both map
//! to the canonical `rule`.
//!
//! EA cards may carry two citation fields: `irs_ref` (an IRS
//! publication or IRC section) and a generic `reference`. The
//! track-specific field wins when both are present.

use serde::{Deserialize, Serialize};
use tracing::trace;

use prep_model::{ContentType, Difficulty, Section, StudyUnit};

/// SEE exam part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EaSection {
    /// Part 1: Individuals.
    See1,
    /// Part 2: Businesses.
    See2,
    /// Part 3: Representation, Practices and Procedures.
    See3,
}

impl EaSection {
    /// Returns the registered section this part maps to.
    pub fn section(&self) -> Section {
        match self {
            EaSection::See1 => Section::See1,
            EaSection::See2 => Section::See2,
            EaSection::See3 => Section::See3,
        }
    }
}

/// EA native card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EaCardKind {
    Definition,
    Rule,
    /// Statutory dollar limit (e.g. a standard deduction amount).
    Threshold,
    /// Sanction amount or rate (e.g. failure-to-file percentage).
    Penalty,
    Comparison,
    Formula,
}

impl EaCardKind {
    /// Maps the native kind onto the canonical 6-way vocabulary.
    /// Thresholds and penalties state what the law prescribes: `rule`.
    pub fn canonical(&self) -> ContentType {
        match self {
            EaCardKind::Definition => ContentType::Definition,
            EaCardKind::Rule => ContentType::Rule,
            EaCardKind::Threshold => ContentType::Rule,
            EaCardKind::Penalty => ContentType::Rule,
            EaCardKind::Comparison => ContentType::Comparison,
            EaCardKind::Formula => ContentType::Formula,
        }
    }
}

/// One EA-authored flashcard in its native shape. This track has no
/// subtopic or tag fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EaFlashcard {
    pub id: String,
    pub section: EaSection,
    pub kind: EaCardKind,
    pub topic: String,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_area: Option<String>,
    /// IRS-specific citation (publication or IRC section).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irs_ref: Option<String>,
    /// Generic citation, used when no IRS-specific one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl EaFlashcard {
    /// Citation precedence: the track-specific field, then the generic
    /// field, then absent.
    fn resolved_reference(&self) -> Option<String> {
        self.irs_ref.clone().or_else(|| self.reference.clone())
    }
}

/// Converts a batch of EA cards into canonical units.
///
/// Total over its input: same length, same relative order, ids carried
/// through unchanged.
pub fn adapt_ea(cards: &[EaFlashcard]) -> Vec<StudyUnit> {
    cards.iter().map(adapt_one).collect()
}

fn adapt_one(card: &EaFlashcard) -> StudyUnit {
    trace!(id = %card.id, "adapting EA card");
    StudyUnit {
        id: card.id.clone(),
        section: card.section.section(),
        kind: card.kind.canonical(),
        topic: card.topic.clone(),
        subtopic: None,
        blueprint_area: card.blueprint_area.clone(),
        front: card.front.clone(),
        back: card.back.clone(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: None,
        difficulty: card.difficulty,
        tags: Vec::new(),
        reference: card.resolved_reference(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card(id: &str, kind: EaCardKind) -> EaFlashcard {
        EaFlashcard {
            id: id.to_string(),
            section: EaSection::See3,
            kind,
            topic: "Penalties".to_string(),
            front: "Failure to File Penalty".to_string(),
            back: "5% per month, capped at 25%.".to_string(),
            difficulty: Difficulty::Medium,
            blueprint_area: Some("SEE3-3".to_string()),
            irs_ref: None,
            reference: None,
        }
    }

    #[test]
    fn penalty_and_threshold_map_to_rule() {
        let cards = vec![
            card("SEE3-EXP-029", EaCardKind::Penalty),
            card("SEE3-EXP-030", EaCardKind::Penalty),
            card("SEE1-EXP-006", EaCardKind::Threshold),
        ];
        let units = adapt_ea(&cards);
        assert!(units.iter().all(|u| u.kind == ContentType::Rule));
    }

    #[test]
    fn irs_ref_wins_over_generic_reference() {
        let mut with_both = card("SEE1-EXP-040", EaCardKind::Rule);
        with_both.irs_ref = Some("IRC §6651".to_string());
        with_both.reference = Some("Pub 17".to_string());

        let mut generic_only = card("SEE1-EXP-041", EaCardKind::Rule);
        generic_only.reference = Some("Pub 17".to_string());

        let units = adapt_ea(&[with_both, generic_only]);
        assert_eq!(units[0].reference.as_deref(), Some("IRC §6651"));
        assert_eq!(units[1].reference.as_deref(), Some("Pub 17"));
    }

    #[test]
    fn absent_citations_stay_absent() {
        let units = adapt_ea(&[card("SEE3-EXP-032", EaCardKind::Rule)]);
        assert_eq!(units[0].reference, None);
    }

    fn arb_kind() -> impl Strategy<Value = EaCardKind> {
        prop_oneof![
            Just(EaCardKind::Definition),
            Just(EaCardKind::Rule),
            Just(EaCardKind::Threshold),
            Just(EaCardKind::Penalty),
            Just(EaCardKind::Comparison),
            Just(EaCardKind::Formula),
        ]
    }

    fn arb_section() -> impl Strategy<Value = EaSection> {
        prop_oneof![
            Just(EaSection::See1),
            Just(EaSection::See2),
            Just(EaSection::See3),
        ]
    }

    fn arb_card() -> impl Strategy<Value = EaFlashcard> {
        (
            "[A-Z0-9-]{4,16}",
            arb_section(),
            arb_kind(),
            proptest::option::of("[A-Za-z0-9 §.-]{1,20}"),
            proptest::option::of("[A-Za-z0-9 .-]{1,20}"),
        )
            .prop_map(|(id, section, kind, irs_ref, reference)| EaFlashcard {
                id,
                section,
                kind,
                topic: "Filing Status".to_string(),
                front: "front".to_string(),
                back: "back".to_string(),
                difficulty: Difficulty::Easy,
                blueprint_area: None,
                irs_ref,
                reference,
            })
    }

    proptest! {
        #[test]
        fn adapter_is_total(cards in prop::collection::vec(arb_card(), 0..32)) {
            let units = adapt_ea(&cards);
            prop_assert_eq!(units.len(), cards.len());
            for (unit, card) in units.iter().zip(&cards) {
                prop_assert_eq!(&unit.id, &card.id);
                prop_assert_eq!(unit.section, card.section.section());
            }
        }
    }
}
