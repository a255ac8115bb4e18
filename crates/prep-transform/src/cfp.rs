//! CFP (Certified Financial Planner) native records and adapter.
//!
//! The CFP exam is one sitting, so the whole track maps to a single
//! registered section. Its content is organized by principal-knowledge
//! domain instead: the native `domain` becomes the canonical blueprint
//! area ("CFP-RET", "CFP-TAX", ...), and the native free-text `category`
//! becomes the topic.
//!
//! CFP authors frequently omit the card kind. An absent kind defaults to
//! `concept`, the broadest canonical value; the record is always kept.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use prep_model::{ContentType, Difficulty, Section, StudyUnit};

/// CFP principal-knowledge domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CfpDomain {
    /// General Principles of Financial Planning.
    Gen,
    /// Retirement Savings and Income Planning.
    Ret,
    /// Tax Planning.
    Tax,
    /// Investment Planning.
    Inv,
    /// Risk Management and Insurance Planning.
    Risk,
    /// Estate Planning.
    Est,
    /// Professional Conduct and Regulation.
    Pro,
    /// Psychology of Financial Planning.
    Psy,
}

impl CfpDomain {
    /// All eight principal-knowledge domains.
    pub const ALL: [CfpDomain; 8] = [
        CfpDomain::Gen,
        CfpDomain::Ret,
        CfpDomain::Tax,
        CfpDomain::Inv,
        CfpDomain::Risk,
        CfpDomain::Est,
        CfpDomain::Pro,
        CfpDomain::Psy,
    ];

    /// Returns the domain code as authored ("GEN", "RET", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            CfpDomain::Gen => "GEN",
            CfpDomain::Ret => "RET",
            CfpDomain::Tax => "TAX",
            CfpDomain::Inv => "INV",
            CfpDomain::Risk => "RISK",
            CfpDomain::Est => "EST",
            CfpDomain::Pro => "PRO",
            CfpDomain::Psy => "PSY",
        }
    }

    /// Returns the canonical blueprint-area label for this domain.
    pub fn blueprint_area(&self) -> String {
        format!("CFP-{}", self.as_str())
    }
}

/// CFP native card kind. The vocabulary already matches the canonical
/// one; the track's quirk is that the field is usually absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CfpCardKind {
    Definition,
    Formula,
    Mnemonic,
    Comparison,
    Concept,
    Rule,
}

impl CfpCardKind {
    pub fn canonical(&self) -> ContentType {
        match self {
            CfpCardKind::Definition => ContentType::Definition,
            CfpCardKind::Formula => ContentType::Formula,
            CfpCardKind::Mnemonic => ContentType::Mnemonic,
            CfpCardKind::Comparison => ContentType::Comparison,
            CfpCardKind::Concept => ContentType::Concept,
            CfpCardKind::Rule => ContentType::Rule,
        }
    }
}

/// One CFP-authored flashcard in its native shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfpFlashcard {
    pub id: String,
    pub domain: CfpDomain,
    /// Free-text grouping within the domain (e.g. "Time Value of Money").
    pub category: String,
    /// Usually absent; see the module default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<CfpCardKind>,
    pub front: String,
    pub back: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Converts a batch of CFP cards into canonical units.
///
/// Total over its input: same length, same relative order, ids carried
/// through unchanged.
pub fn adapt_cfp(cards: &[CfpFlashcard]) -> Vec<StudyUnit> {
    cards.iter().map(adapt_one).collect()
}

fn adapt_one(card: &CfpFlashcard) -> StudyUnit {
    trace!(id = %card.id, "adapting CFP card");
    let kind = match card.kind {
        Some(kind) => kind.canonical(),
        None => {
            debug!(id = %card.id, "CFP card has no kind, defaulting to concept");
            ContentType::Concept
        }
    };
    StudyUnit {
        id: card.id.clone(),
        section: Section::Cfp,
        kind,
        topic: card.category.clone(),
        subtopic: None,
        blueprint_area: Some(card.domain.blueprint_area()),
        front: card.front.clone(),
        back: card.back.clone(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: None,
        difficulty: card.difficulty,
        tags: card.tags.clone(),
        reference: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, domain: CfpDomain, kind: Option<CfpCardKind>) -> CfpFlashcard {
        CfpFlashcard {
            id: id.to_string(),
            domain,
            category: "Time Value of Money".to_string(),
            kind,
            front: "What is the Rule of 72?".to_string(),
            back: "Years to double = 72 / interest rate.".to_string(),
            difficulty: Difficulty::Easy,
            tags: vec!["TVM".to_string()],
        }
    }

    #[test]
    fn every_cfp_card_lands_in_the_cfp_section() {
        let cards = vec![
            card("FC-GEN-001", CfpDomain::Gen, None),
            card("FC-RET-001", CfpDomain::Ret, Some(CfpCardKind::Rule)),
        ];
        let units = adapt_cfp(&cards);
        assert!(units.iter().all(|u| u.section == Section::Cfp));
    }

    #[test]
    fn domain_becomes_blueprint_area() {
        let units = adapt_cfp(&[card("FC-EST-001", CfpDomain::Est, None)]);
        assert_eq!(units[0].blueprint_area.as_deref(), Some("CFP-EST"));
    }

    #[test]
    fn category_becomes_topic() {
        let units = adapt_cfp(&[card("FC-GEN-001", CfpDomain::Gen, None)]);
        assert_eq!(units[0].topic, "Time Value of Money");
    }

    #[test]
    fn absent_kind_defaults_to_concept() {
        let units = adapt_cfp(&[
            card("FC-GEN-001", CfpDomain::Gen, None),
            card("FC-GEN-002", CfpDomain::Gen, Some(CfpCardKind::Formula)),
        ]);
        assert_eq!(units[0].kind, ContentType::Concept);
        assert_eq!(units[1].kind, ContentType::Formula);
    }

    #[test]
    fn adapter_preserves_identity_and_order() {
        let cards: Vec<CfpFlashcard> = CfpDomain::ALL
            .iter()
            .enumerate()
            .map(|(index, domain)| {
                card(&format!("FC-{}-{index:03}", domain.as_str()), *domain, None)
            })
            .collect();
        let units = adapt_cfp(&cards);
        assert_eq!(units.len(), cards.len());
        for (unit, card) in units.iter().zip(&cards) {
            assert_eq!(unit.id, card.id);
        }
    }
}
