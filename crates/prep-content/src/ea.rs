//! EA track content in its native shape, covering all three SEE parts.

use prep_model::Difficulty;
use prep_transform::{EaCardKind, EaFlashcard, EaSection};

fn card(
    id: &str,
    section: EaSection,
    kind: EaCardKind,
    topic: &str,
    front: &str,
    back: &str,
    difficulty: Difficulty,
) -> EaFlashcard {
    EaFlashcard {
        id: id.to_string(),
        section,
        kind,
        topic: topic.to_string(),
        front: front.to_string(),
        back: back.to_string(),
        difficulty,
        blueprint_area: None,
        irs_ref: None,
        reference: None,
    }
}

pub fn cards() -> Vec<EaFlashcard> {
    vec![
        EaFlashcard {
            blueprint_area: Some("SEE1-1".to_string()),
            irs_ref: Some("Pub 501".to_string()),
            ..card(
                "SEE1-EXP-001",
                EaSection::See1,
                EaCardKind::Definition,
                "Filing Status",
                "Single filing status requirements",
                "Use if on the last day of the year you are unmarried or legally \
                 separated and do not qualify for another filing status.",
                Difficulty::Easy,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE1-1".to_string()),
            ..card(
                "SEE1-EXP-004",
                EaSection::See1,
                EaCardKind::Rule,
                "Filing Status",
                "Head of Household (HOH) requirements",
                "Unmarried or considered unmarried on the last day of the year, paid \
                 more than half the cost of keeping up a home, and a qualifying person \
                 lived with you more than half the year (dependent parents excepted).",
                Difficulty::Medium,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE1-2".to_string()),
            ..card(
                "SEE1-EXP-006",
                EaSection::See1,
                EaCardKind::Threshold,
                "Standard Deduction",
                "Standard deduction - Single (2024)",
                "$14,600",
                Difficulty::Easy,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE2-2".to_string()),
            irs_ref: Some("IRC §6655".to_string()),
            ..card(
                "SEE2-EXP-010",
                EaSection::See2,
                EaCardKind::Rule,
                "Corporate Payments",
                "Corporate estimated tax requirements",
                "Corporations expecting $500 or more of tax must pay quarterly \
                 estimates; large corporations must use current-year tax, not the \
                 prior-year safe harbor.",
                Difficulty::Medium,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE2-1".to_string()),
            ..card(
                "SEE2-EXP-014",
                EaSection::See2,
                EaCardKind::Formula,
                "Self-Employment Tax",
                "How is self-employment tax computed?",
                "Net self-employment earnings x 92.35% x 15.3%, with the Social \
                 Security portion capped at the annual wage base. Half of the tax is \
                 deductible for AGI.",
                Difficulty::Medium,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE3-3".to_string()),
            irs_ref: Some("IRC §6651(a)(1)".to_string()),
            reference: Some("Pub 17".to_string()),
            ..card(
                "SEE3-EXP-029",
                EaSection::See3,
                EaCardKind::Penalty,
                "Penalties",
                "Failure to file penalty",
                "5% per month, capped at 25%. Returns more than 60 days late owe a \
                 minimum of $510 or 100% of the tax.",
                Difficulty::Medium,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE3-3".to_string()),
            irs_ref: Some("IRC §6651(a)(2)".to_string()),
            ..card(
                "SEE3-EXP-030",
                EaSection::See3,
                EaCardKind::Penalty,
                "Penalties",
                "Failure to pay penalty",
                "0.5% per month, capped at 25%. Reduced to 0.25% during an installment \
                 agreement, raised to 1% after a levy notice.",
                Difficulty::Medium,
            )
        },
        EaFlashcard {
            blueprint_area: Some("SEE3-3".to_string()),
            ..card(
                "SEE3-EXP-031",
                EaSection::See3,
                EaCardKind::Comparison,
                "Penalties",
                "Failure to file vs failure to pay",
                "When both apply, failure to file (5%) is reduced by failure to pay \
                 (0.5%) for a combined 5% per month.",
                Difficulty::Hard,
            )
        },
    ]
}
