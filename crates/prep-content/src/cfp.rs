//! CFP track content in its native shape, one or more cards per
//! principal-knowledge domain. The kind field is usually left off, as
//! the track's authors do.

use prep_model::Difficulty;
use prep_transform::{CfpCardKind, CfpDomain, CfpFlashcard};

fn card(
    id: &str,
    domain: CfpDomain,
    category: &str,
    front: &str,
    back: &str,
    difficulty: Difficulty,
    tags: &[&str],
) -> CfpFlashcard {
    CfpFlashcard {
        id: id.to_string(),
        domain,
        category: category.to_string(),
        kind: None,
        front: front.to_string(),
        back: back.to_string(),
        difficulty,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
    }
}

pub fn cards() -> Vec<CfpFlashcard> {
    vec![
        CfpFlashcard {
            kind: Some(CfpCardKind::Formula),
            ..card(
                "FC-GEN-001",
                CfpDomain::Gen,
                "Time Value of Money",
                "What is the Rule of 72?",
                "Years to double = 72 / interest rate. At 8%, money doubles in 9 years.",
                Difficulty::Easy,
                &["TVM", "quick-calc"],
            )
        },
        card(
            "FC-RET-001",
            CfpDomain::Ret,
            "401(k) Plans",
            "2026 401(k) contribution limits?",
            "Employee deferral $24,500; catch-up (50+) adds $7,500; super catch-up \
             (60-63) adds $11,250. Total annual addition $71,500.",
            Difficulty::Easy,
            &["401k", "limits"],
        ),
        CfpFlashcard {
            kind: Some(CfpCardKind::Rule),
            ..card(
                "FC-TAX-004",
                CfpDomain::Tax,
                "Deductions",
                "What is the SALT deduction limit?",
                "State and local taxes are capped at $10,000 ($5,000 MFS), covering \
                 income or sales tax plus property taxes. Business property taxes are \
                 not limited.",
                Difficulty::Easy,
                &["SALT", "itemized"],
            )
        },
        CfpFlashcard {
            kind: Some(CfpCardKind::Formula),
            ..card(
                "FC-INV-003",
                CfpDomain::Inv,
                "Performance",
                "Sharpe ratio formula and interpretation?",
                "(Portfolio return - risk-free rate) / portfolio standard deviation. \
                 Higher is better; it prices total risk, not just market risk.",
                Difficulty::Medium,
                &["Sharpe", "risk-adjusted"],
            )
        },
        card(
            "FC-RISK-008",
            CfpDomain::Risk,
            "Risk Management",
            "What are the four risk management techniques?",
            "Avoid, reduce, retain, transfer. High severity with low frequency: \
             transfer. Low severity with high frequency: retain.",
            Difficulty::Easy,
            &["techniques", "ARRT"],
        ),
        CfpFlashcard {
            kind: Some(CfpCardKind::Definition),
            ..card(
                "FC-EST-002",
                CfpDomain::Est,
                "Trusts",
                "What is a revocable living trust?",
                "A trust the grantor can modify or revoke. It avoids probate but not \
                 estate tax; assets stay in the grantor's estate and there is no \
                 income tax savings.",
                Difficulty::Medium,
                &["trust", "probate"],
            )
        },
        card(
            "FC-PRO-004",
            CfpDomain::Pro,
            "Code of Ethics",
            "What are the CFP Board's four Code of Ethics principles?",
            "Integrity, objectivity, competence, fairness - aspirational principles \
             guiding professional conduct.",
            Difficulty::Easy,
            &["ethics", "principles"],
        ),
        card(
            "FC-PSY-001",
            CfpDomain::Psy,
            "Behavioral Finance",
            "What is loss aversion and how does it affect client decisions?",
            "Losses are felt roughly twice as strongly as equivalent gains, leading \
             clients to hold losers too long and to abandon plans after drawdowns.",
            Difficulty::Medium,
            &["bias", "behavior"],
        ),
    ]
}
