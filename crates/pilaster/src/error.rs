//! Error types for layout calculation and rendering.

use thiserror::Error;

/// Errors that can occur while columnizing items.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// No column configuration fits in the allowed line width.
    #[error("items do not fit in line")]
    InsufficientWidth,

    /// A fixed column count of zero was requested.
    #[error("number of columns must be positive")]
    InvalidColumns,

    /// A line width of zero was requested.
    #[error("line width must be positive")]
    InvalidLineWidth,

    /// The filter pattern could not be compiled.
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Line width detection was requested but no terminal is attached.
    #[error("unable to detect line width")]
    TerminalWidth,

    /// An input line has fewer columns than the requested index.
    #[error("no column {index} in line {lineno}")]
    ColumnIndex {
        /// Zero-based index of the requested column.
        index: usize,
        /// One-based number of the offending line.
        lineno: usize,
    },

    /// Items could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
