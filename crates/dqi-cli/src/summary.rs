//! Terminal summary rendering for score results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ScoreResult;

pub fn print_summary(result: &ScoreResult) {
    println!("Rows scored: {}", result.rows);
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Median"),
        header_cell("Quintiles (20/40/60/80)"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=5 {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for outcome in &result.outcomes {
        match &outcome.summary {
            Some(summary) => {
                let quintiles = summary
                    .quintiles
                    .iter()
                    .map(|q| format!("{q:.2}"))
                    .collect::<Vec<_>>()
                    .join(" / ");
                table.add_row(vec![
                    index_cell(&outcome.name),
                    Cell::new(format!("{:.2}", summary.mean)),
                    Cell::new(format!("{:.2}", summary.std)),
                    Cell::new(format!("{:.2}", summary.min)),
                    Cell::new(format!("{:.2}", summary.max)),
                    Cell::new(format!("{:.2}", summary.median)),
                    Cell::new(quintiles),
                ]);
            }
            None => {
                let note = outcome.error.as_deref().unwrap_or("no finite scores");
                table.add_row(vec![
                    index_cell(&outcome.name),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new("-").fg(Color::DarkGrey),
                    Cell::new(note).fg(Color::Red),
                ]);
            }
        }
    }
    println!("{table}");

    let skipped: Vec<&crate::types::IndexOutcome> = result
        .outcomes
        .iter()
        .filter(|outcome| outcome.error.is_some())
        .collect();
    if !skipped.is_empty() {
        eprintln!("Skipped indices:");
        for outcome in skipped {
            eprintln!("- {}: {}", outcome.name, outcome.error.as_deref().unwrap_or(""));
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn index_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}
