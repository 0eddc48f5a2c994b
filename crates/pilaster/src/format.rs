//! Rendering of items into columnized lines.
//!
//! A [`Formatter`] combines a width calculator with the presentation
//! details: the separator between columns, the separator between
//! lines, and whether line breaks are left to the terminal. Sequences
//! render in as many columns as fit, with items flowing down each
//! column. Mappings render as two columns with one key/value pair per
//! line.

use log::debug;

use crate::config;
use crate::error::Result;
use crate::items::Items;
use crate::layout::{ColumnWidthCalculator, LineProperties};
use crate::measure::{char_slice, measure_width, pad_or_truncate, truncate};
use crate::terminal;

/// Renders items into columnized lines.
///
/// # Example
///
/// ```
/// use pilaster::{Formatter, Items};
///
/// let formatter = Formatter::for_line_config(2, 80);
/// let output = formatter.format(&Items::sequence(["spam", "ham", "eggs"])).unwrap();
/// assert_eq!(output, "spam  ham  eggs");
/// ```
#[derive(Clone, Debug)]
pub struct Formatter {
    /// Decides column widths and line counts.
    pub calculator: ColumnWidthCalculator,
    linesep: String,
    column_sep: String,
    autowrap: bool,
}

impl Formatter {
    /// Formatter over an explicit calculator, with a blank separator of
    /// the calculator's spacing and `\n` between lines.
    pub fn new(calculator: ColumnWidthCalculator) -> Self {
        let column_sep = " ".repeat(calculator.spacing);
        Formatter {
            calculator,
            linesep: config::LINESEP.to_string(),
            column_sep,
            autowrap: false,
        }
    }

    /// Formatter for a fixed line width.
    pub fn for_line_config(spacing: usize, line_width: usize) -> Self {
        Self::new(ColumnWidthCalculator::new(spacing, line_width))
    }

    /// Formatter for the terminal attached to stdout.
    ///
    /// Uses the detected window width and allows a single overwide
    /// column to exceed it. When stdout really is a terminal, lines
    /// that exactly fill the window get no explicit line break since
    /// the terminal wraps them on its own.
    pub fn for_terminal(spacing: usize) -> Self {
        let info = terminal::detect();
        let calculator = ColumnWidthCalculator::new(spacing, info.width).allow_exceeding(true);
        Self::new(calculator).autowrap(info.is_terminal)
    }

    /// Set the separator between output lines.
    pub fn linesep(mut self, linesep: impl Into<String>) -> Self {
        self.linesep = linesep.into();
        self
    }

    /// Leave breaks after exactly filled lines to the terminal.
    pub fn autowrap(mut self, autowrap: bool) -> Self {
        self.autowrap = autowrap;
        self
    }

    /// Replace the blank column separator with half the spacing, `sep`,
    /// and half the spacing again. The calculator's spacing follows the
    /// separator's character count so the fit check stays exact.
    pub fn extra_sep(mut self, sep: char) -> Self {
        let half = " ".repeat(self.calculator.spacing / 2);
        self.column_sep = format!("{half}{sep}{half}");
        self.calculator.spacing = measure_width(&self.column_sep);
        self
    }

    /// Render `items` into one columnized string.
    pub fn format(&self, items: &Items) -> Result<String> {
        Ok(self.join_lines(&self.make_lines(items)?))
    }

    /// Columnized lines for `items`, without line separators.
    ///
    /// A line holding a wrapped item keeps its wrap separators inline,
    /// so the number of returned lines always equals the number of
    /// item rows.
    pub fn make_lines(&self, items: &Items) -> Result<Vec<String>> {
        match items {
            Items::Sequence(items) => {
                let props = self.calculator.line_properties(items)?;
                let rows = sequence_rows(items, props.num_lines);
                Ok(self.render_rows(&rows, &props.column_widths))
            }
            Items::Mapping(pairs) => {
                let props = self.mapping_properties(pairs)?;
                let rows = mapping_rows(pairs);
                Ok(self.render_rows(&rows, &props.column_widths))
            }
        }
    }

    /// Properties for two-column key/value rendering.
    ///
    /// Keys and values are measured through one calculation with a
    /// fixed column count of two, so the first chunk holds exactly the
    /// keys and the second chunk the values. Values may shrink down to
    /// the configured minimum when a pair would overflow the line.
    fn mapping_properties(&self, pairs: &[(String, String)]) -> Result<LineProperties> {
        let chained: Vec<&str> = pairs
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(pairs.iter().map(|(_, value)| value.as_str()))
            .collect();
        self.mapping_calculator().line_properties(&chained)
    }

    fn mapping_calculator(&self) -> ColumnWidthCalculator {
        let mut calculator = self.calculator.clone().num_columns(2);
        if calculator.min_shrink_width.is_none() {
            calculator = calculator.min_shrink_width(config::MIN_SHRINK_WIDTH);
        }
        calculator
    }

    fn render_rows(&self, rows: &[Vec<&str>], column_widths: &[usize]) -> Vec<String> {
        rows.iter()
            .map(|row| self.render_row(row, column_widths))
            .collect()
    }

    /// Render one row of items, wrapping any item that is wider than
    /// its column into vertically aligned slices.
    fn render_row(&self, row: &[&str], column_widths: &[usize]) -> String {
        let num_slices = row
            .iter()
            .zip(column_widths)
            .map(|(item, &width)| sub_line_count(measure_width(item), width))
            .max()
            .unwrap_or(0);
        let wrapsep = if self.autowrap { "" } else { self.linesep.as_str() };
        (0..num_slices)
            .map(|slice| self.render_slice(row, column_widths, slice))
            .collect::<Vec<_>>()
            .join(wrapsep)
    }

    fn render_slice(&self, row: &[&str], column_widths: &[usize], slice: usize) -> String {
        let last = row.len().saturating_sub(1);
        let parts: Vec<String> = row
            .iter()
            .zip(column_widths)
            .enumerate()
            .map(|(column, (item, &width))| {
                let piece = char_slice(item, width * slice, width * (slice + 1));
                if column == last {
                    truncate(piece, width)
                } else {
                    pad_or_truncate(piece, width)
                }
            })
            .collect();
        parts.join(&self.column_sep)
    }

    /// Concatenate `lines`, appending a line separator after each one.
    ///
    /// A line that exactly fills the line width gets the wrap separator
    /// instead, which is empty in autowrap mode because the terminal
    /// breaks there anyway. Trailing line separators are stripped.
    fn join_lines(&self, lines: &[String]) -> String {
        let wrapsep = if self.autowrap { "" } else { self.linesep.as_str() };
        debug!(
            "joining {} lines (linesep: {:?}, wrapsep: {:?})",
            lines.len(),
            self.linesep,
            wrapsep
        );
        let mut output = String::new();
        for line in lines {
            output.push_str(line);
            if measure_width(line) == self.calculator.line_width {
                output.push_str(wrapsep);
            } else {
                output.push_str(&self.linesep);
            }
        }
        output.trim_end_matches(self.linesep.as_str()).to_string()
    }
}

/// Rows of a sequence rendering. Row `r` holds the items at positions
/// `r`, `r + num_lines`, `r + 2 * num_lines` and so on, which makes
/// items flow down the columns.
fn sequence_rows(items: &[String], num_lines: usize) -> Vec<Vec<&str>> {
    (0..num_lines)
        .map(|row| {
            items
                .iter()
                .skip(row)
                .step_by(num_lines)
                .map(String::as_str)
                .collect()
        })
        .collect()
}

fn mapping_rows(pairs: &[(String, String)]) -> Vec<Vec<&str>> {
    pairs
        .iter()
        .map(|(key, value)| vec![key.as_str(), value.as_str()])
        .collect()
}

/// Number of wrapped slices needed to show `len` characters in a
/// column of `width` characters. Empty items need no slice at all, so
/// a row of empty items renders as an empty line.
fn sub_line_count(len: usize, width: usize) -> usize {
    if len == 0 || width == 0 {
        0
    } else {
        len.div_ceil(width)
    }
}
