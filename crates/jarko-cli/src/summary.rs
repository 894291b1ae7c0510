//! Table rendering for loaded and normalized frames.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, Column, DataFrame, PolarsResult};

/// How tables are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStyle {
    /// Box-drawing borders with colored headers.
    #[default]
    Rounded,
    /// Plain GitHub-flavored Markdown, never colored.
    Markdown,
}

/// Text shown for a null cell.
pub const NULL_TEXT: &str = "null";

/// Converts a cell value to display text.
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => NULL_TEXT.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// First `rows` rows of `df`, one table column per frame column.
pub fn frame_table(df: &DataFrame, rows: usize, style: TableStyle) -> PolarsResult<Table> {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str(), style)),
    );
    apply_table_style(&mut table, style);

    let columns = df.get_columns();
    for row in 0..rows.min(df.height()) {
        let cells = columns
            .iter()
            .map(|column| column.get(row).map(|value| value_cell(value, style)))
            .collect::<PolarsResult<Vec<_>>>()?;
        table.add_row(cells);
    }
    Ok(table)
}

/// Column names with their data types.
pub fn schema_table(df: &DataFrame, style: TableStyle) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column", style), header_cell("Type", style)]);
    apply_table_style(&mut table, style);
    for column in df.get_columns() {
        table.add_row(vec![
            Cell::new(column.name().as_str()),
            Cell::new(column.dtype().to_string()),
        ]);
    }
    table
}

/// Side-by-side original and normalized values of one column.
pub fn preview_table(
    original: &Column,
    normalized: &Column,
    rows: usize,
    style: TableStyle,
) -> PolarsResult<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row", style),
        header_cell("Original", style),
        header_cell("Normalized", style),
    ]);
    apply_table_style(&mut table, style);
    if style == TableStyle::Rounded
        && let Some(column) = table.column_mut(0)
    {
        column.set_cell_alignment(CellAlignment::Right);
    }

    for row in 0..rows.min(original.len()) {
        table.add_row(vec![
            Cell::new(row),
            value_cell(original.get(row)?, style),
            value_cell(normalized.get(row)?, style),
        ]);
    }
    Ok(table)
}

pub fn apply_table_style(table: &mut Table, style: TableStyle) {
    match style {
        TableStyle::Rounded => {
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(120);
        }
        TableStyle::Markdown => {
            table
                .load_preset(ASCII_MARKDOWN)
                .set_content_arrangement(ContentArrangement::Disabled)
                .force_no_tty();
        }
    }
}

fn header_cell(label: &str, style: TableStyle) -> Cell {
    match style {
        TableStyle::Rounded => Cell::new(label)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        TableStyle::Markdown => Cell::new(label),
    }
}

fn value_cell(value: AnyValue<'_>, style: TableStyle) -> Cell {
    let is_null = value.is_null();
    let cell = Cell::new(cell_text(value));
    if is_null && style == TableStyle::Rounded {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}
