//! Command implementations.

use anyhow::Context;
use tracing::warn;

use prep_library::{library, query};
use prep_model::{ContentType, Difficulty, Section, StudyUnit};

use crate::cli::{ListArgs, StatsArgs};
use crate::summary::{print_sections, print_stats, print_units, print_verified};

pub fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    let stats = library().stats();
    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("serialize stats")?;
        println!("{json}");
    } else {
        print_stats(&stats);
    }
    Ok(())
}

pub fn run_list(args: &ListArgs) -> anyhow::Result<()> {
    let library = library();
    let mut units: Vec<&StudyUnit> = library.units().iter().collect();

    // Unknown spellings yield an empty listing, not an error: the query
    // surface is total.
    if let Some(raw) = &args.section {
        match raw.parse::<Section>() {
            Ok(section) => units = query::by_section(units, section),
            Err(error) => {
                warn!(%error, "nothing matches");
                units.clear();
            }
        }
    }
    if let Some(raw) = &args.kind {
        match raw.parse::<ContentType>() {
            Ok(kind) => units = query::by_kind(units, kind),
            Err(error) => {
                warn!(%error, "nothing matches");
                units.clear();
            }
        }
    }
    if let Some(raw) = &args.difficulty {
        match raw.parse::<Difficulty>() {
            Ok(difficulty) => units = query::by_difficulty(units, difficulty),
            Err(error) => {
                warn!(%error, "nothing matches");
                units.clear();
            }
        }
    }
    if let Some(area) = &args.area {
        units = query::by_blueprint_area(units, area);
    }

    print_units(&units);
    Ok(())
}

pub fn run_sections() -> anyhow::Result<()> {
    print_sections(library());
    Ok(())
}

pub fn run_check() -> anyhow::Result<()> {
    let summary = library()
        .verify()
        .context("collection failed verification")?;
    print_verified(&summary);
    Ok(())
}
