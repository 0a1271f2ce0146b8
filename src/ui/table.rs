//! Plain-text table formatting for the loosely structured course records.
//!
//! Rows arrive as JSON objects whose field sets vary between service
//! versions. Columns are the union of the keys seen, in first-seen order,
//! matching the order the service sent them. No sorting of rows or columns.

use serde_json::Value;

use crate::constants::ui::MAX_COLUMN_WIDTH;
use crate::data_fetcher::models::{CourseSummary, HoleRow, TeeRow};

/// Column label for the tee grouping tag.
const GROUP_COLUMN: &str = "group";

/// Summary table columns, the well-known subset shown for search results.
const SUMMARY_COLUMNS: [&str; 5] = ["id", "name", "city", "state", "country"];

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Formats the table as padded text lines: one column-header line
    /// followed by one line per row. Cells wider than the column cap are
    /// truncated with an ellipsis.
    pub fn render_lines(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .map(|row| row.get(i).map_or(0, |cell| cell.chars().count()))
                    .max()
                    .unwrap_or(0);
                widest_cell.max(column.chars().count()).min(MAX_COLUMN_WIDTH)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(format_row(&self.columns, &widths));
        for row in &self.rows {
            lines.push(format_row(row, &widths));
        }
        lines
    }
}

/// Builds the search result table from projected summaries. Only the
/// well-known columns that actually carry a value in some row are included.
pub fn summaries_table(summaries: &[CourseSummary]) -> Table {
    let rows_as_fields: Vec<Vec<Option<String>>> = summaries
        .iter()
        .map(|summary| {
            vec![
                Some(summary.id.to_string()),
                Some(summary.label.clone()),
                summary.city.clone(),
                summary.state.clone(),
                summary.country.clone(),
            ]
        })
        .collect();

    let mut keep: Vec<usize> = Vec::new();
    for (i, _) in SUMMARY_COLUMNS.iter().enumerate() {
        if rows_as_fields.iter().any(|row| row[i].is_some()) {
            keep.push(i);
        }
    }

    Table {
        columns: keep.iter().map(|&i| SUMMARY_COLUMNS[i].to_string()).collect(),
        rows: rows_as_fields
            .iter()
            .map(|row| {
                keep.iter()
                    .map(|&i| row[i].clone().unwrap_or_default())
                    .collect()
            })
            .collect(),
    }
}

/// Builds the flattened tee-box table. The group column appears first and
/// only when at least one row carries a group tag.
pub fn tees_table(rows: &[TeeRow]) -> Table {
    let has_groups = rows.iter().any(|row| row.group.is_some());

    let mut columns: Vec<String> = Vec::new();
    if has_groups {
        columns.push(GROUP_COLUMN.to_string());
    }
    for row in rows {
        for key in row.fields.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    if has_groups && column == GROUP_COLUMN {
                        row.group.clone().unwrap_or_default()
                    } else {
                        row.fields.get(column).map(cell_text).unwrap_or_default()
                    }
                })
                .collect()
        })
        .collect();

    Table {
        columns,
        rows: table_rows,
    }
}

/// Builds the hole-by-hole table, rows and fields in received order.
pub fn holes_table(rows: &[HoleRow]) -> Table {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.fields.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let table_rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.fields.get(column).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Table {
        columns,
        rows: table_rows,
    }
}

/// Cell text for one JSON value. Strings render bare, scalars via their JSON
/// form, null as empty; nested containers keep their compact JSON form.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let text: String = if cell.chars().count() > *width {
            let mut truncated: String = cell.chars().take(width.saturating_sub(1)).collect();
            truncated.push('…');
            truncated
        } else {
            cell.to_string()
        };
        line.push_str(&text);
        for _ in text.chars().count()..*width {
            line.push(' ');
        }
        if i + 1 < widths.len() {
            line.push_str("  ");
        }
    }
    line.trim_end().to_string()
}
