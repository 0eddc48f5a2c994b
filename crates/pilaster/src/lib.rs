//! Columnized text layout in the style of `ls`.
//!
//! Pilaster takes a list of string items and renders them in as many
//! columns as fit into a given line width, filling each column top to
//! bottom. Key/value pairs render as two columns with one pair per
//! line, shrinking the columns when a pair would overflow. The line
//! width comes from the attached terminal unless set explicitly.
//!
//! # Quick start
//!
//! ```
//! use pilaster::{columnize_with, Items, Options};
//!
//! let items = Items::sequence(["src", "target", "Cargo.toml", "README.md"]);
//! let options = Options::new().line_width(24);
//! let output = columnize_with(items, &options).unwrap();
//! assert_eq!(output, "src     Cargo.toml\ntarget  README.md");
//! ```
//!
//! Key/value pairs:
//!
//! ```
//! use pilaster::{columnize_with, Items, Options};
//!
//! let pairs = Items::mapping([("key", "value"), ("other", "thing")]);
//! let output = columnize_with(pairs, &Options::new().line_width(80)).unwrap();
//! assert_eq!(output, "key    value\nother  thing");
//! ```
//!
//! The building blocks are available on their own: a
//! [`ColumnWidthCalculator`] decides column widths and line counts,
//! a [`Formatter`] renders items based on them.

use std::io::Write;
use std::path::Path;

use itertools::Itertools;

pub mod config;
mod error;
mod filter;
mod format;
mod fs;
mod input;
mod items;
mod layout;
mod measure;
mod terminal;

// Re-export public API
pub use config::Options;
pub use error::{LayoutError, Result};
pub use filter::filter_names;
pub use format::Formatter;
pub use fs::dir_entries;
pub use input::{read_lines, select_column};
pub use items::Items;
pub use layout::{ColumnConfig, ColumnWidthCalculator, LineProperties};
pub use measure::{char_slice, measure_width, pad_or_truncate, truncate};
pub use terminal::{detect, terminal_width, TerminalInfo};

/// Columnize `items` with default options.
///
/// The line width is taken from the attached terminal, falling back
/// to [`config::LINE_WIDTH_FALLBACK`] when there is none.
pub fn columnize(items: Items) -> Result<String> {
    columnize_with(items, &Options::default())
}

/// Columnize `items` according to `options`.
pub fn columnize_with(items: Items, options: &Options) -> Result<String> {
    let items = prepare(items, options)?;
    let formatter = build_formatter(&items, options);
    formatter.format(&items)
}

/// Write columnized `items` to `writer`, with a trailing line break.
pub fn write_columnized<W: Write>(
    writer: &mut W,
    items: Items,
    options: &Options,
) -> Result<()> {
    let output = columnize_with(items, options)?;
    writer.write_all(output.as_bytes())?;
    writer.write_all(options.linesep.as_bytes())?;
    Ok(())
}

/// Columnize the names of the entries in the directory at `path`.
///
/// Names are always sorted. With `hide_dotted` set, names starting
/// with a dot are skipped.
pub fn columnize_dir(
    path: impl AsRef<Path>,
    hide_dotted: bool,
    options: &Options,
) -> Result<String> {
    let names = fs::dir_entries(path, hide_dotted)?;
    let options = options.clone().sort_items(true);
    columnize_with(Items::Sequence(names), &options)
}

/// Apply the item-level options: uniqueness, filtering, sorting.
fn prepare(items: Items, options: &Options) -> Result<Items> {
    let mut items = items;
    if options.unique {
        items = match items {
            Items::Sequence(sequence) => {
                Items::Sequence(sequence.into_iter().unique().collect())
            }
            mapping => mapping,
        };
    }
    if let Some(pattern) = &options.pattern {
        items = filter_names(items, pattern)?;
    }
    if options.sort_items {
        match &mut items {
            Items::Sequence(sequence) => sequence.sort_unstable(),
            Items::Mapping(pairs) => {
                pairs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            }
        }
    }
    Ok(items)
}

/// Resolve `options` into a formatter for the given item shape.
///
/// Without an explicit line width the terminal width is used, a single
/// overwide column may then exceed it, and breaks after exactly filled
/// lines are left to the terminal. Mappings always render in two
/// columns and may shrink them, sequences only get a fixed column
/// count when one was requested.
fn build_formatter(items: &Items, options: &Options) -> Formatter {
    let (line_width, autowrap) = match options.line_width {
        Some(width) => (width, false),
        None => {
            let info = terminal::detect();
            (info.width, info.is_terminal)
        }
    };
    let exceed_default = matches!(items, Items::Sequence(_)) && options.line_width.is_none();
    let mut calculator = ColumnWidthCalculator::new(options.spacing, line_width)
        .allow_exceeding(options.allow_exceeding.unwrap_or(exceed_default));
    match items {
        Items::Sequence(_) => {
            if let Some(num_columns) = options.num_columns {
                calculator = calculator.num_columns(num_columns);
            }
        }
        Items::Mapping(_) => {
            calculator = calculator
                .num_columns(2)
                .min_shrink_width(options.min_shrink_width);
        }
    }
    let mut formatter = Formatter::new(calculator)
        .linesep(options.linesep.as_str())
        .autowrap(autowrap);
    if let Some(sep) = options.extra_sep {
        formatter = formatter.extra_sep(sep);
    }
    formatter
}
