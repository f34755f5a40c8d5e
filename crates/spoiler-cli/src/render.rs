use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use spoiler_core::{Chapter, Visibility};

use crate::evaluate::{CycleOutcome, GateRow, GateSummary, SelectionOutcome, VariantView};
use crate::profile::ReaderProfile;

pub fn gate_table(summary: &GateSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Title"),
        header_cell("Chapter"),
        header_cell("Flag"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for row in &summary.rows {
        table.add_row(gate_row(row));
    }
    table
}

pub fn gate_footer(summary: &GateSummary) -> String {
    format!(
        "effective progress {}: {} shown, {} hidden",
        summary.effective_progress,
        summary.shown_count(),
        summary.hidden_count()
    )
}

pub fn selection_line(outcome: &SelectionOutcome) -> String {
    match &outcome.selected {
        Some(selected) => format!("{} -> {}", outcome.owner, variant_text(selected)),
        None if outcome.variant_count == 0 => format!("{}: no content", outcome.owner),
        None => format!(
            "{}: no content unlocked at chapter {} ({} locked)",
            outcome.owner, outcome.effective_progress, outcome.variant_count
        ),
    }
}

pub fn cycle_lines(outcome: &CycleOutcome) -> String {
    let (Some(start), Some(end)) = (&outcome.start, &outcome.end) else {
        return format!("{}: no content", outcome.owner);
    };
    format!(
        "{owner} start [{start_pos}/{len}] {start}\n{owner} after {steps:+} [{end_pos}/{len}] {end}",
        owner = outcome.owner,
        start_pos = start.index + 1,
        end_pos = end.index + 1,
        len = outcome.variant_count,
        steps = outcome.steps,
        start = variant_text(start),
        end = variant_text(end),
    )
}

pub fn profile_text(profile: &ReaderProfile) -> String {
    let progress = profile.progress_state();
    let override_text = if progress.has_override() {
        progress.tolerance_override.to_string()
    } else {
        "off".to_string()
    };
    format!(
        "raw progress: {}\ntolerance override: {}\nshow all: {}\neffective progress: {}\nuntagged threshold: {}",
        progress.raw_progress,
        override_text,
        progress.show_all,
        progress.effective_progress(),
        profile.gate.untagged_threshold
    )
}

fn variant_text(variant: &VariantView) -> String {
    format!(
        "{} ({}, {})",
        variant.payload,
        chapter_text(variant.chapter),
        variant.visibility.label()
    )
}

fn chapter_text(chapter: Option<Chapter>) -> String {
    match chapter {
        Some(chapter) => format!("chapter {chapter}"),
        None => "no chapter".to_string(),
    }
}

fn gate_row(row: &GateRow) -> Vec<Cell> {
    vec![
        Cell::new(row.key.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&row.label),
        match row.spoiler_chapter {
            Some(chapter) => Cell::new(chapter.get()),
            None => dim_cell("-"),
        },
        match row.is_spoiler {
            Some(true) => Cell::new("spoiler").fg(Color::Yellow),
            Some(false) => dim_cell("safe"),
            None => dim_cell("-"),
        },
        visibility_cell(row.visibility),
        dim_cell(row.reason.label()),
    ]
}

fn visibility_cell(visibility: Visibility) -> Cell {
    match visibility {
        Visibility::Visible => Cell::new("VISIBLE").fg(Color::Green),
        Visibility::Hidden => Cell::new("HIDDEN")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Visibility::Revealed => Cell::new("REVEALED").fg(Color::Yellow),
    }
}

pub fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
