use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    println!("Output: {}", result.out_dir.display());
    if result.dry_run {
        println!("Dry run: no files were written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Target"),
        header_cell("Themes"),
        header_cell("Files"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_files = 0usize;
    for summary in &result.targets {
        total_files += summary.files.len();
        table.add_row(vec![
            Cell::new(summary.target)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.theme_count),
            Cell::new(summary.files.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_files).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_file_list(result);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_file_list(result: &GenerateResult) {
    let verb = if result.dry_run { "would write" } else { "wrote" };
    for summary in &result.targets {
        for path in &summary.files {
            println!("{verb} {}", path.display());
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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
