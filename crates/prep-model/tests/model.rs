//! Tests for prep-model types.

use prep_model::{Comparison, ContentType, Difficulty, Section, StudyUnit, Track};

#[test]
fn every_section_serializes_to_its_code() {
    for section in Section::ALL {
        let json = serde_json::to_value(section).expect("serialize section");
        assert_eq!(json, section.as_str());
    }
}

#[test]
fn every_section_belongs_to_exactly_one_track() {
    for section in Section::ALL {
        let owners: Vec<Track> = Track::ALL
            .into_iter()
            .filter(|track| track.sections().contains(&section))
            .collect();
        assert_eq!(owners.len(), 1, "section {section} owned by {owners:?}");
        assert_eq!(owners[0], section.track());
    }
}

#[test]
fn comparison_unit_roundtrips() {
    let unit = StudyUnit {
        id: "isc-fc-002".to_string(),
        section: Section::Isc,
        kind: ContentType::Comparison,
        topic: "Service Organization Controls".to_string(),
        subtopic: None,
        blueprint_area: Some("ISC-II".to_string()),
        front: "Compare SOC 1 and SOC 2 reports.".to_string(),
        back: "SOC 1 covers ICFR; SOC 2 covers trust services criteria.".to_string(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: Some(Comparison {
            item_a: "SOC 1".to_string(),
            item_b: "SOC 2".to_string(),
            differences: vec!["audience".to_string(), "criteria".to_string()],
        }),
        difficulty: Difficulty::Medium,
        tags: Vec::new(),
        reference: None,
    };
    let json = serde_json::to_string(&unit).expect("serialize unit");
    let round: StudyUnit = serde_json::from_str(&json).expect("deserialize unit");
    assert_eq!(round, unit);
    assert_eq!(round.comparison.as_ref().map(|c| c.differences.len()), Some(2));
}

#[test]
fn content_type_codes_are_the_closed_six() {
    let codes: Vec<&str> = ContentType::ALL.iter().map(|kind| kind.as_str()).collect();
    assert_eq!(
        codes,
        vec![
            "definition",
            "formula",
            "mnemonic",
            "comparison",
            "concept",
            "rule"
        ]
    );
}
