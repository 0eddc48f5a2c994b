//! Default values and the options consumed by the high-level API.

use serde::{Deserialize, Serialize};

/// Number of blank characters between two columns.
pub const SPACING: usize = 2;

/// Line width assumed when no width was given and detection fails.
pub const LINE_WIDTH_FALLBACK: usize = 80;

/// Default separator between output lines.
pub const LINESEP: &str = "\n";

/// Smallest width a key/value column may be shrunk to.
pub const MIN_SHRINK_WIDTH: usize = 10;

/// Options for [`columnize_with`](crate::columnize_with).
///
/// The defaults mirror plain `ls`-like behavior: two blanks between
/// columns, the line width taken from the attached terminal, items kept
/// in their given order.
///
/// # Example
///
/// ```
/// use pilaster::Options;
///
/// let options = Options::new().line_width(60).spacing(4).sort_items(true);
/// assert_eq!(options.line_width, Some(60));
/// assert_eq!(options.spacing, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of separator characters between two columns.
    pub spacing: usize,
    /// Maximal number of characters per line, or `None` to use the
    /// width of the attached terminal.
    pub line_width: Option<usize>,
    /// Fixed number of columns for sequence items, or `None` to fit as
    /// many columns as possible. Ignored for key/value pairs, which
    /// always render in two columns.
    pub num_columns: Option<usize>,
    /// Whether a single overwide column may exceed the line width.
    /// `None` resolves to `true` for sequences rendered at detected
    /// terminal width and to `false` otherwise.
    pub allow_exceeding: Option<bool>,
    /// Sort items before rendering. Key/value pairs sort by key.
    pub sort_items: bool,
    /// Drop all but the first occurrence of repeated sequence items.
    pub unique: bool,
    /// Only render items whose name matches this shell-like pattern.
    pub pattern: Option<String>,
    /// Extra character placed in the middle of each column separator.
    pub extra_sep: Option<char>,
    /// Separator between output lines.
    pub linesep: String,
    /// Smallest width the key/value columns may be shrunk to.
    pub min_shrink_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            spacing: SPACING,
            line_width: None,
            num_columns: None,
            allow_exceeding: None,
            sort_items: false,
            unique: false,
            pattern: None,
            extra_sep: None,
            linesep: LINESEP.to_string(),
            min_shrink_width: MIN_SHRINK_WIDTH,
        }
    }
}

impl Options {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of blanks between two columns.
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set a fixed line width instead of detecting the terminal width.
    pub fn line_width(mut self, line_width: usize) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Set a fixed number of columns for sequence items.
    pub fn num_columns(mut self, num_columns: usize) -> Self {
        self.num_columns = Some(num_columns);
        self
    }

    /// Allow or forbid a single overwide column to exceed the line width.
    pub fn allow_exceeding(mut self, allow: bool) -> Self {
        self.allow_exceeding = Some(allow);
        self
    }

    /// Sort items before rendering.
    pub fn sort_items(mut self, sort: bool) -> Self {
        self.sort_items = sort;
        self
    }

    /// Drop all but the first occurrence of repeated sequence items.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Only render items whose name matches `pattern`.
    ///
    /// Patterns follow shell rules: `*` matches any run of characters,
    /// `?` matches a single character, and the whole name must match.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Put `sep` in the middle of each column separator, surrounded by
    /// half of the configured spacing on each side.
    pub fn extra_sep(mut self, sep: char) -> Self {
        self.extra_sep = Some(sep);
        self
    }

    /// Set the separator between output lines.
    pub fn linesep(mut self, linesep: impl Into<String>) -> Self {
        self.linesep = linesep.into();
        self
    }

    /// Set the smallest width the key/value columns may be shrunk to.
    pub fn min_shrink_width(mut self, width: usize) -> Self {
        self.min_shrink_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = Options::new();
        assert_eq!(options.spacing, SPACING);
        assert_eq!(options.line_width, None);
        assert_eq!(options.num_columns, None);
        assert_eq!(options.allow_exceeding, None);
        assert!(!options.sort_items);
        assert!(!options.unique);
        assert_eq!(options.pattern, None);
        assert_eq!(options.extra_sep, None);
        assert_eq!(options.linesep, LINESEP);
        assert_eq!(options.min_shrink_width, MIN_SHRINK_WIDTH);
    }

    #[test]
    fn builder_chains() {
        let options = Options::new()
            .spacing(4)
            .line_width(100)
            .num_columns(3)
            .allow_exceeding(true)
            .sort_items(true)
            .unique(true)
            .pattern("x*")
            .extra_sep('|')
            .linesep("\r\n")
            .min_shrink_width(5);
        assert_eq!(options.spacing, 4);
        assert_eq!(options.line_width, Some(100));
        assert_eq!(options.num_columns, Some(3));
        assert_eq!(options.allow_exceeding, Some(true));
        assert!(options.sort_items);
        assert!(options.unique);
        assert_eq!(options.pattern.as_deref(), Some("x*"));
        assert_eq!(options.extra_sep, Some('|'));
        assert_eq!(options.linesep, "\r\n");
        assert_eq!(options.min_shrink_width, 5);
    }

    #[test]
    fn options_survive_serde_round_trip() {
        let options = Options::new().line_width(72).pattern("*.rs");
        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
