//! CPA track content, authored natively in the canonical shape.
//!
//! Two independently authored batches: the high-yield core-section
//! batch (FAR/AUD/REG) and the discipline-section batch (TCP/ISC/BAR).

use prep_model::{Comparison, ContentType, Difficulty, Section, StudyUnit};

fn unit(
    id: &str,
    section: Section,
    kind: ContentType,
    topic: &str,
    front: &str,
    back: &str,
    difficulty: Difficulty,
) -> StudyUnit {
    StudyUnit {
        id: id.to_string(),
        section,
        kind,
        topic: topic.to_string(),
        subtopic: None,
        blueprint_area: None,
        front: front.to_string(),
        back: back.to_string(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: None,
        difficulty,
        tags: Vec::new(),
        reference: None,
    }
}

/// High-yield core-section batch: FAR, AUD, REG.
pub fn core_batch() -> Vec<StudyUnit> {
    vec![
        StudyUnit {
            subtopic: Some("ASC 606 5-Step Model".to_string()),
            blueprint_area: Some("FAR-III".to_string()),
            mnemonic: Some(
                "I-I-D-A-R: Identify, Identify, Determine, Allocate, Recognize".to_string(),
            ),
            example: Some(
                "Software + training bundle: separate performance obligations, allocate \
                 the price by standalone selling price, recognize software at transfer \
                 and training over time."
                    .to_string(),
            ),
            tags: vec!["ASC 606".to_string(), "revenue".to_string()],
            reference: Some("ASC 606-10-25".to_string()),
            ..unit(
                "far-wc-fc-001",
                Section::Far,
                ContentType::Concept,
                "Revenue Recognition",
                "What are the 5 steps of ASC 606 revenue recognition?",
                "1. Identify the contract\n2. Identify performance obligations\n\
                 3. Determine the transaction price\n4. Allocate the transaction price\n\
                 5. Recognize revenue when (or as) each obligation is satisfied",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("Finance vs Operating".to_string()),
            blueprint_area: Some("FAR-III".to_string()),
            mnemonic: Some(
                "OWNES: Ownership, Written option, NPV 90%, Economic life 75%, Specialized"
                    .to_string(),
            ),
            tags: vec!["ASC 842".to_string(), "lease classification".to_string()],
            reference: Some("ASC 842-10-25".to_string()),
            ..unit(
                "far-wc-fc-002",
                Section::Far,
                ContentType::Concept,
                "Leases",
                "What are the OWNES criteria for classifying a finance lease?",
                "Any one criterion makes the lease a finance lease: ownership transfers \
                 at lease end, a written bargain purchase option exists, the present \
                 value is at least 90% of fair value, the lease term covers at least \
                 75% of economic life, or the asset is specialized with no alternative \
                 use. None met means operating lease.",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("CECL Model".to_string()),
            blueprint_area: Some("FAR-II".to_string()),
            formula: Some("Allowance = Amortized Cost x Expected Credit Loss Rate".to_string()),
            example: Some(
                "$1M loan portfolio with a 3% expected lifetime loss rate carries a \
                 $30,000 allowance at inception."
                    .to_string(),
            ),
            tags: vec!["CECL".to_string(), "credit losses".to_string()],
            reference: Some("ASC 326-20".to_string()),
            ..unit(
                "far-wc-fc-003",
                Section::Far,
                ContentType::Formula,
                "Current Expected Credit Losses",
                "How is the CECL allowance calculated under ASC 326?",
                "Recognize lifetime expected credit losses at inception, forward-looking \
                 and including forecasts. Allowance equals amortized cost times the \
                 expected lifetime loss rate; subsequent changes flow through income.",
                Difficulty::Hard,
            )
        },
        StudyUnit {
            subtopic: Some("Risk Components".to_string()),
            blueprint_area: Some("AUD-I".to_string()),
            formula: Some("AR = IR x CR x DR".to_string()),
            tags: vec!["audit risk".to_string(), "planning".to_string()],
            reference: Some("AU-C 200".to_string()),
            ..unit(
                "aud-wc-fc-001",
                Section::Aud,
                ContentType::Formula,
                "Audit Risk Model",
                "State the audit risk model and what each component measures.",
                "Audit risk = inherent risk x control risk x detection risk. The auditor \
                 controls detection risk; inherent and control risk belong to the entity \
                 and are assessed, not set.",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("Unmodified vs Modified".to_string()),
            blueprint_area: Some("AUD-IV".to_string()),
            tags: vec!["reporting".to_string(), "opinions".to_string()],
            reference: Some("AU-C 705".to_string()),
            ..unit(
                "aud-wc-fc-002",
                Section::Aud,
                ContentType::Concept,
                "Audit Reports",
                "When does an auditor issue a qualified opinion versus an adverse opinion?",
                "Qualified: material misstatement or scope limitation that is material \
                 but not pervasive. Adverse: misstatement both material and pervasive. \
                 Disclaimer: scope limitation both material and pervasive.",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("Like-Kind Exchanges".to_string()),
            blueprint_area: Some("REG-IV".to_string()),
            tags: vec!["1031".to_string(), "real estate".to_string()],
            reference: Some("IRC §1031".to_string()),
            ..unit(
                "reg-wc-fc-001",
                Section::Reg,
                ContentType::Rule,
                "Property Transactions",
                "What are the requirements for a valid §1031 like-kind exchange?",
                "Real property held for investment or business use only, identification \
                 within 45 days, closing within 180 days, qualified intermediary \
                 required. Boot received is taxable to the extent of realized gain.",
                Difficulty::Hard,
            )
        },
        StudyUnit {
            subtopic: Some("Filing Requirements".to_string()),
            blueprint_area: Some("REG-I".to_string()),
            tags: vec!["circular 230".to_string(), "practice".to_string()],
            reference: Some("Circular 230 §10.34".to_string()),
            ..unit(
                "reg-wc-fc-002",
                Section::Reg,
                ContentType::Definition,
                "Ethics and Responsibilities",
                "What standard must a practitioner meet to sign a return under Circular 230?",
                "A position must have at least a reasonable basis and be disclosed, or \
                 have substantial authority undisclosed. A practitioner may not sign a \
                 return containing a frivolous position.",
                Difficulty::Medium,
            )
        },
    ]
}

/// Discipline-section batch: TCP, ISC, BAR.
pub fn discipline_batch() -> Vec<StudyUnit> {
    vec![
        StudyUnit {
            subtopic: Some("Estimated Payments".to_string()),
            blueprint_area: Some("TCP-I".to_string()),
            tags: vec!["safe harbor".to_string(), "individuals".to_string()],
            reference: Some("IRC §6654".to_string()),
            ..unit(
                "tcp-fc-001",
                Section::Tcp,
                ContentType::Rule,
                "Individual Tax Planning",
                "What are the safe-harbor thresholds for individual estimated tax payments?",
                "Pay the lesser of 90% of the current-year tax or 100% of the prior-year \
                 tax (110% when prior-year AGI exceeds $150,000) to avoid the \
                 underpayment penalty.",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("Entity Classification".to_string()),
            blueprint_area: Some("TCP-III".to_string()),
            tags: vec!["check-the-box".to_string(), "entities".to_string()],
            ..unit(
                "tcp-fc-002",
                Section::Tcp,
                ContentType::Definition,
                "Entity Tax Planning",
                "What is the check-the-box election?",
                "An eligible entity may elect its federal tax classification: a single \
                 member entity defaults to disregarded, a multi-member entity to \
                 partnership, and either may elect corporate treatment on Form 8832.",
                Difficulty::Easy,
            )
        },
        StudyUnit {
            subtopic: Some("Control Categories".to_string()),
            blueprint_area: Some("ISC-I".to_string()),
            tags: vec!["ITGC".to_string(), "controls".to_string()],
            reference: Some("COBIT Framework".to_string()),
            ..unit(
                "isc-fc-001",
                Section::Isc,
                ContentType::Definition,
                "IT General Controls",
                "What are IT general controls (ITGC)?",
                "Policies and procedures applying across all IT systems: access \
                 controls, change management, operations, and program development. \
                 ITGCs support the effectiveness of application controls.",
                Difficulty::Easy,
            )
        },
        StudyUnit {
            subtopic: Some("SOC Reporting".to_string()),
            blueprint_area: Some("ISC-II".to_string()),
            comparison: Some(Comparison {
                item_a: "SOC 1".to_string(),
                item_b: "SOC 2".to_string(),
                differences: vec![
                    "SOC 1 covers controls relevant to user entities' financial reporting"
                        .to_string(),
                    "SOC 2 covers the trust services criteria: security, availability, \
                     processing integrity, confidentiality, privacy"
                        .to_string(),
                    "SOC 1 goes to user auditors; SOC 2 distribution is restricted to \
                     knowledgeable parties"
                        .to_string(),
                ],
            }),
            tags: vec!["SOC".to_string(), "attestation".to_string()],
            ..unit(
                "isc-fc-002",
                Section::Isc,
                ContentType::Comparison,
                "Service Organization Controls",
                "Compare SOC 1 and SOC 2 reports.",
                "SOC 1 addresses internal control over financial reporting at a service \
                 organization; SOC 2 addresses the trust services criteria.",
                Difficulty::Medium,
            )
        },
        StudyUnit {
            subtopic: Some("Liquidity".to_string()),
            blueprint_area: Some("BAR-I".to_string()),
            formula: Some("Current Ratio = Current Assets / Current Liabilities".to_string()),
            example: Some("CA $500K, CL $250K gives a current ratio of 2.0.".to_string()),
            tags: vec!["ratio".to_string(), "liquidity".to_string()],
            ..unit(
                "bar-fc-001",
                Section::Bar,
                ContentType::Formula,
                "Ratio Analysis",
                "What is the current ratio formula and what does it measure?",
                "Current assets divided by current liabilities measures short-term \
                 liquidity. Above 1.0 the entity can cover short-term obligations; a \
                 very high ratio suggests inefficient asset use.",
                Difficulty::Easy,
            )
        },
        StudyUnit {
            subtopic: Some("Cost Behavior".to_string()),
            blueprint_area: Some("BAR-II".to_string()),
            tags: vec!["managerial".to_string(), "costs".to_string()],
            ..unit(
                "bar-fc-002",
                Section::Bar,
                ContentType::Concept,
                "Managerial Accounting",
                "Distinguish fixed, variable, and mixed costs.",
                "Fixed costs stay constant in total as volume changes; variable costs \
                 change in proportion to volume; mixed costs carry both a base and a \
                 usage component, like utilities.",
                Difficulty::Medium,
            )
        },
    ]
}

/// All CPA batches in authored order.
pub fn batches() -> Vec<Vec<StudyUnit>> {
    vec![core_batch(), discipline_batch()]
}
