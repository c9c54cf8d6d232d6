//! Aligned table rendering for book records
//!
//! Pure string building, kept separate from command logic so it can be
//! unit tested without touching stdout.

use crate::catalog::Record;

const COLUMNS: [&str; 5] = ["id", "status", "title", "author", "year"];
const SEPARATOR: &str = " | ";

/// Render records as an aligned table with a header row and dashed rule.
///
/// Columns appear in the fixed record field order. Each column is padded
/// to the widest of its header and values. Empty input renders a "no
/// books found" line instead of an empty table.
pub fn render(records: &[&Record]) -> String {
    if records.is_empty() {
        return "no books found\n".to_string();
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.id.clone(),
                r.status.to_string(),
                r.title.clone(),
                r.author.clone(),
                r.year.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let total_width: usize = widths.iter().map(|w| w + SEPARATOR.len()).sum();

    let mut out = String::new();
    for (i, header) in COLUMNS.iter().enumerate() {
        out.push_str(&format!("{:<width$}{}", header, SEPARATOR, width = widths[i]));
    }
    out.push('\n');
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!("{:<width$}{}", cell, SEPARATOR, width = widths[i]));
        }
        out.push('\n');
    }

    out
}
