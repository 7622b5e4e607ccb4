//! Run summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Fetched"), Cell::new(summary.fetched)]);
    table.add_row(vec![Cell::new("Excluded"), Cell::new(summary.excluded)]);
    table.add_row(vec![Cell::new("Unchanged"), Cell::new(summary.unchanged)]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(summary.failures.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Emitted").add_attribute(Attribute::Bold),
        Cell::new(summary.emitted).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if summary.uploaded {
        println!("Upload: delivered");
    } else {
        println!("Upload: FAILED, local file retained");
    }
    if !summary.failures.is_empty() {
        eprintln!("Skipped records:");
        for (identifier, error) in &summary.failures {
            eprintln!("- {identifier}: {error}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
