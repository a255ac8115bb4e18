//! CIA track content in its native shape, covering all three exam parts.

use prep_model::Difficulty;
use prep_transform::{CiaCardKind, CiaFlashcard, CiaPart};

fn card(
    id: &str,
    part: CiaPart,
    kind: CiaCardKind,
    topic: &str,
    front: &str,
    back: &str,
    difficulty: Difficulty,
) -> CiaFlashcard {
    CiaFlashcard {
        id: id.to_string(),
        part,
        kind,
        topic: topic.to_string(),
        subtopic: String::new(),
        front: front.to_string(),
        back: back.to_string(),
        difficulty,
        tags: Vec::new(),
        standard_ref: None,
    }
}

pub fn cards() -> Vec<CiaFlashcard> {
    vec![
        CiaFlashcard {
            subtopic: "Definition".to_string(),
            tags: vec!["definition".to_string(), "IIA".to_string()],
            standard_ref: Some("Definition of Internal Auditing".to_string()),
            ..card(
                "cia1-fc-001",
                CiaPart::Part1,
                CiaCardKind::Definition,
                "Foundations",
                "What is the IIA's definition of internal auditing?",
                "An independent, objective assurance and consulting activity designed \
                 to add value and improve an organization's operations through a \
                 systematic, disciplined approach to risk management, control, and \
                 governance processes.",
                Difficulty::Medium,
            )
        },
        CiaFlashcard {
            subtopic: "Due Professional Care".to_string(),
            tags: vec!["due care".to_string(), "standards".to_string()],
            standard_ref: Some("Standard 1220".to_string()),
            ..card(
                "cia1-fc-004",
                CiaPart::Part1,
                CiaCardKind::Standard,
                "Proficiency",
                "What does due professional care require?",
                "The care and skill of a reasonably prudent and competent internal \
                 auditor. It does not imply infallibility; it requires weighing the \
                 extent of work needed, complexity, significance, and the probability \
                 of errors or fraud.",
                Difficulty::Hard,
            )
        },
        CiaFlashcard {
            subtopic: "Principles".to_string(),
            tags: vec!["ethics".to_string()],
            ..card(
                "cia1-fc-005",
                CiaPart::Part1,
                CiaCardKind::Mnemonic,
                "IIA Code of Ethics",
                "What are the four principles of the IIA Code of Ethics?",
                "IOCO: Integrity, Objectivity, Confidentiality, Competency.",
                Difficulty::Easy,
            )
        },
        CiaFlashcard {
            subtopic: "Planning Elements".to_string(),
            standard_ref: Some("Standard 2200".to_string()),
            ..card(
                "cia2-fc-001",
                CiaPart::Part2,
                CiaCardKind::Concept,
                "Engagement Planning",
                "What must engagement planning establish?",
                "Objectives, scope, timing, and resource allocation, considering the \
                 strategies and objectives of the activity under review and the \
                 adequacy of its governance, risk management, and control processes.",
                Difficulty::Medium,
            )
        },
        CiaFlashcard {
            subtopic: "Service Models".to_string(),
            tags: vec!["cloud".to_string()],
            ..card(
                "cia3-fc-008",
                CiaPart::Part3,
                CiaCardKind::Comparison,
                "Cloud Computing",
                "Compare IaaS, PaaS, and SaaS cloud service models.",
                "IaaS provides virtualized computing resources and the customer manages \
                 OS, apps, and data. PaaS provides the development platform and the \
                 customer manages apps and data. SaaS provides complete applications \
                 and the customer manages only data.",
                Difficulty::Medium,
            )
        },
        CiaFlashcard {
            subtopic: "Liquidity".to_string(),
            tags: vec!["ratios".to_string(), "liquidity".to_string()],
            ..card(
                "cia3-fc-011",
                CiaPart::Part3,
                CiaCardKind::Formula,
                "Financial Ratios",
                "What are the key liquidity ratios?",
                "Current ratio = current assets / current liabilities. Quick ratio \
                 excludes inventory. Cash ratio keeps only cash and equivalents, the \
                 most conservative measure.",
                Difficulty::Medium,
            )
        },
    ]
}
