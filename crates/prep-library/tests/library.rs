//! Collection-level laws over the aggregated library.

use prep_library::{Library, LibraryError, library, query};
use prep_model::{ContentType, Difficulty, Section, StudyUnit};

fn unit(id: &str, section: Section, kind: ContentType, difficulty: Difficulty) -> StudyUnit {
    StudyUnit {
        id: id.to_string(),
        section,
        kind,
        topic: "Topic".to_string(),
        subtopic: None,
        blueprint_area: None,
        front: "front".to_string(),
        back: "back".to_string(),
        example: None,
        formula: None,
        mnemonic: None,
        comparison: None,
        difficulty,
        tags: Vec::new(),
        reference: None,
    }
}

#[test]
fn shipped_corpus_has_unique_ids() {
    let summary = library().verify().expect("no duplicate ids in shipped content");
    assert_eq!(summary.total, library().len());
}

#[test]
fn sections_partition_the_collection() {
    let library = library();
    let mut reassembled = 0;
    for section in Section::ALL {
        let bucket = library.by_section(section);
        assert!(bucket.iter().all(|unit| unit.section == section));
        reassembled += bucket.len();
    }
    assert_eq!(reassembled, library.len());
}

#[test]
fn kinds_partition_the_collection() {
    let library = library();
    let total: usize = ContentType::ALL
        .iter()
        .map(|kind| library.by_kind(*kind).len())
        .sum();
    assert_eq!(total, library.len());
}

#[test]
fn difficulties_partition_the_collection() {
    let library = library();
    let total: usize = Difficulty::ALL
        .iter()
        .map(|difficulty| library.by_difficulty(*difficulty).len())
        .sum();
    assert_eq!(total, library.len());
}

#[test]
fn stats_are_consistent_with_the_collection() {
    let library = library();
    let stats = library.stats();
    assert_eq!(stats.total, library.len());
    assert_eq!(stats.by_section.values().sum::<usize>(), stats.total);
    assert_eq!(stats.by_kind.values().sum::<usize>(), stats.total);
    assert_eq!(stats.by_difficulty.values().sum::<usize>(), stats.total);
    // Dense breakdowns carry every enum value even when zero.
    assert_eq!(stats.by_kind.len(), ContentType::ALL.len());
    assert_eq!(stats.by_difficulty.len(), Difficulty::ALL.len());
}

#[test]
fn empty_collection_stats_shape() {
    let stats = Library::assemble(Vec::new()).stats();
    assert_eq!(stats.total, 0);
    assert!(stats.by_section.is_empty());
    assert_eq!(stats.by_kind.len(), ContentType::ALL.len());
    assert!(stats.by_kind.values().all(|count| *count == 0));
    assert_eq!(stats.by_difficulty.len(), Difficulty::ALL.len());
    assert!(stats.by_difficulty.values().all(|count| *count == 0));
}

#[test]
fn by_section_counts_match_authored_batches() {
    let library = Library::assemble(vec![
        (0..5)
            .map(|i| {
                unit(
                    &format!("far-{i}"),
                    Section::Far,
                    ContentType::Concept,
                    Difficulty::Easy,
                )
            })
            .collect(),
        (0..3)
            .map(|i| {
                unit(
                    &format!("aud-{i}"),
                    Section::Aud,
                    ContentType::Concept,
                    Difficulty::Easy,
                )
            })
            .collect(),
    ]);
    assert_eq!(library.by_section(Section::Far).len(), 5);
    assert_eq!(library.by_section(Section::Aud).len(), 3);
    assert!(library.by_section(Section::Reg).is_empty());
}

#[test]
fn difficulty_buckets_sum_to_total() {
    let mut units = Vec::new();
    for i in 0..100 {
        let difficulty = if i < 40 {
            Difficulty::Easy
        } else if i < 70 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        };
        units.push(unit(
            &format!("u-{i}"),
            Section::Far,
            ContentType::Concept,
            difficulty,
        ));
    }
    let library = Library::assemble(vec![units]);
    assert_eq!(library.by_difficulty(Difficulty::Easy).len(), 40);
    let stats = library.stats();
    assert_eq!(stats.by_difficulty.values().sum::<usize>(), 100);
}

#[test]
fn queries_are_idempotent_and_non_mutating() {
    let library = library();
    let before = library.stats();
    let first = library.by_section(Section::Far);
    let second = library.by_section(Section::Far);
    assert_eq!(first, second);
    assert_eq!(library.stats(), before);
}

#[test]
fn queries_compose_by_sequential_application() {
    let library = library();
    let chained = query::by_difficulty(
        library.by_section(Section::Far),
        Difficulty::Medium,
    );
    let direct: Vec<&StudyUnit> = library
        .units()
        .iter()
        .filter(|unit| unit.section == Section::Far && unit.difficulty == Difficulty::Medium)
        .collect();
    assert_eq!(chained, direct);
}

#[test]
fn unknown_blueprint_area_yields_empty() {
    assert!(library().by_blueprint_area("FAR-XIV").is_empty());
}

#[test]
fn blueprint_area_queries_stay_within_one_section() {
    let far_iii = library().by_blueprint_area("FAR-III");
    assert!(!far_iii.is_empty());
    assert!(far_iii.iter().all(|unit| unit.section == Section::Far));
}

#[test]
fn duplicate_ids_across_batches_fail_verification() {
    let library = Library::assemble(vec![
        vec![unit("dup-1", Section::Far, ContentType::Concept, Difficulty::Easy)],
        vec![unit("dup-1", Section::Aud, ContentType::Rule, Difficulty::Hard)],
    ]);
    // Aggregation itself never drops content.
    assert_eq!(library.len(), 2);
    match library.verify() {
        Err(LibraryError::DuplicateIds { ids }) => assert_eq!(ids, vec!["dup-1".to_string()]),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn stats_serialize_with_enum_codes_as_keys() {
    let json = serde_json::to_value(library().stats()).expect("serialize stats");
    assert!(json["bySection"].get("FAR").is_some());
    assert!(json["byKind"].get("definition").is_some());
    assert!(json["byDifficulty"].get("easy").is_some());
}
