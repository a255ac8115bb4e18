//! CIA (Certified Internal Auditor) native records and adapter.
//!
//! CIA content is authored against the IIA's exam parts with its own
//! card-kind vocabulary: it has a `standard` kind for cards that state
//! an IIA Standard, and its citation field carries the standard number
//! (e.g. "Standard 1100") rather than a generic reference.

use serde::{Deserialize, Serialize};
use tracing::trace;

use prep_model::{ContentType, Difficulty, Section, StudyUnit};

/// CIA exam part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CiaPart {
    /// Part 1: Essentials of Internal Auditing.
    Part1,
    /// Part 2: Practice of Internal Auditing.
    Part2,
    /// Part 3: Business Knowledge for Internal Auditing.
    Part3,
}

impl CiaPart {
    /// Returns the registered section this part maps to.
    pub fn section(&self) -> Section {
        match self {
            CiaPart::Part1 => Section::Cia1,
            CiaPart::Part2 => Section::Cia2,
            CiaPart::Part3 => Section::Cia3,
        }
    }
}

/// CIA native card kind. One entry per vocabulary value used by the
/// track's authors; extending the vocabulary without extending
/// `canonical()` is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiaCardKind {
    Definition,
    /// A card stating an IIA Standard. No canonical counterpart exists;
    /// a standard prescribes conduct, so it maps to `rule`.
    Standard,
    Formula,
    Concept,
    Mnemonic,
    Comparison,
}

impl CiaCardKind {
    /// Maps the native kind onto the canonical 6-way vocabulary.
    pub fn canonical(&self) -> ContentType {
        match self {
            CiaCardKind::Definition => ContentType::Definition,
            CiaCardKind::Standard => ContentType::Rule,
            CiaCardKind::Formula => ContentType::Formula,
            CiaCardKind::Concept => ContentType::Concept,
            CiaCardKind::Mnemonic => ContentType::Mnemonic,
            CiaCardKind::Comparison => ContentType::Comparison,
        }
    }
}

/// One CIA-authored flashcard in its native shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiaFlashcard {
    pub id: String,
    pub part: CiaPart,
    pub kind: CiaCardKind,
    pub topic: String,
    /// Required in this track; every CIA card carries a subtopic.
    pub subtopic: String,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    /// IIA Standard citation (e.g. "Standard 1220").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_ref: Option<String>,
}

/// Converts a batch of CIA cards into canonical units.
///
/// Total over its input: same length, same relative order, ids carried
/// through unchanged.
pub fn adapt_cia(cards: &[CiaFlashcard]) -> Vec<StudyUnit> {
    cards.iter().map(adapt_one).collect()
}

fn adapt_one(card: &CiaFlashcard) -> StudyUnit {
    trace!(id = %card.id, "adapting CIA card");
    StudyUnit {
        id: card.id.clone(),
        section: card.part.section(),
        kind: card.kind.canonical(),
        topic: card.topic.clone(),
        subtopic: Some(card.subtopic.clone()),
        blueprint_area: None,
        front: card.front.clone(),
        back: card.back.clone(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: None,
        difficulty: card.difficulty,
        tags: card.tags.clone(),
        reference: card.standard_ref.clone(),
    }
}
