//! Table rendering for stats, listings, and section output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prep_library::{ConformanceSummary, Library, LibraryStats};
use prep_model::{Section, StudyUnit, Track};

pub fn print_stats(stats: &LibraryStats) {
    let mut sections = Table::new();
    sections.set_header(vec![
        header_cell("Section"),
        header_cell("Track"),
        header_cell("Units"),
    ]);
    apply_table_style(&mut sections);
    align_column(&mut sections, 2, CellAlignment::Right);
    for (section, count) in &stats.by_section {
        sections.add_row(vec![
            Cell::new(section.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(section.track().as_str()),
            Cell::new(count),
        ]);
    }
    sections.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new("All tracks")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total).add_attribute(Attribute::Bold),
    ]);
    println!("{sections}");

    let mut kinds = Table::new();
    kinds.set_header(vec![header_cell("Type"), header_cell("Units")]);
    apply_table_style(&mut kinds);
    align_column(&mut kinds, 1, CellAlignment::Right);
    for (kind, count) in &stats.by_kind {
        kinds.add_row(vec![Cell::new(kind.as_str()), count_cell(*count)]);
    }
    println!("{kinds}");

    let mut difficulties = Table::new();
    difficulties.set_header(vec![header_cell("Difficulty"), header_cell("Units")]);
    apply_table_style(&mut difficulties);
    align_column(&mut difficulties, 1, CellAlignment::Right);
    for (difficulty, count) in &stats.by_difficulty {
        difficulties.add_row(vec![Cell::new(difficulty.as_str()), count_cell(*count)]);
    }
    println!("{difficulties}");
}

pub fn print_units(units: &[&StudyUnit]) {
    if units.is_empty() {
        println!("No study units match.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Section"),
        header_cell("Type"),
        header_cell("Topic"),
        header_cell("Area"),
        header_cell("Difficulty"),
    ]);
    apply_table_style(&mut table);
    for unit in units {
        table.add_row(vec![
            Cell::new(&unit.id),
            Cell::new(unit.section.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(unit.kind.as_str()),
            Cell::new(&unit.topic),
            match &unit.blueprint_area {
                Some(area) => Cell::new(area),
                None => dim_cell("-"),
            },
            Cell::new(unit.difficulty.as_str()),
        ]);
    }
    println!("{table}");
    println!("{} study units", units.len());
}

pub fn print_sections(library: &Library) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Track"),
        header_cell("Title"),
        header_cell("Units"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for section in Section::ALL {
        table.add_row(vec![
            Cell::new(section.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(section.track().as_str()),
            Cell::new(section.display_name()),
            count_cell(library.by_section(section).len()),
        ]);
    }
    println!("{table}");
}

pub fn print_verified(summary: &ConformanceSummary) {
    println!("OK: {} units, all ids unique", summary.total);
    for track in Track::ALL {
        if let Some(count) = summary.by_track.get(&track) {
            println!("  {}: {count}", track.as_str());
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
