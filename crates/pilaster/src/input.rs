//! Line-based input, as consumed by the command-line frontend.

use std::io::BufRead;

use crate::error::{LayoutError, Result};

/// Read all lines from `reader`, without their trailing line breaks.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Take the whitespace-separated column `index` from every line.
///
/// Fails with the one-based line number of the first line that has no
/// such column.
pub fn select_column(lines: &[String], index: usize) -> Result<Vec<String>> {
    lines
        .iter()
        .enumerate()
        .map(|(lineno, line)| {
            line.split_whitespace()
                .nth(index)
                .map(str::to_string)
                .ok_or(LayoutError::ColumnIndex {
                    index,
                    lineno: lineno + 1,
                })
        })
        .collect()
}
