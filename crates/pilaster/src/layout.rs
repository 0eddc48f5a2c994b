//! Column width calculation.
//!
//! The calculator turns a sequence of item widths into a column
//! configuration: how wide each column is and how many lines the
//! rendering needs. Items flow down the first column, continue at the
//! top of the second column, and so on, like the output of `ls`.
//!
//! Two modes exist. In free mode the calculator searches for the
//! largest number of columns whose widths fit into the allowed line
//! width. In fixed mode the number of columns is given and the
//! calculator can optionally shrink columns from the right to make an
//! overwide configuration fit.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{LayoutError, Result};
use crate::measure::measure_width;

/// Layout properties for one columnized rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineProperties {
    /// Width of each column in characters, spacing not included.
    pub column_widths: Vec<usize>,
    /// Number of separator characters between adjacent columns.
    pub spacing: usize,
    /// Number of lines needed to show all items.
    pub num_lines: usize,
}

/// A column width configuration produced during the search.
///
/// Unlike [`LineProperties`] this carries no spacing. Candidates are
/// produced before the spacing-aware fit check decides on one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Width of each column in characters.
    pub column_widths: Vec<usize>,
    /// Number of lines needed to show all items.
    pub num_lines: usize,
}

/// Calculates column widths for items that should be rendered in an
/// `ls`-like fashion.
///
/// # Example
///
/// ```
/// use pilaster::ColumnWidthCalculator;
///
/// let calculator = ColumnWidthCalculator::new(2, 80);
/// let props = calculator.line_properties(&["spam", "ham", "eggs"]).unwrap();
/// assert_eq!(props.column_widths, vec![4, 3, 4]);
/// assert_eq!(props.num_lines, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnWidthCalculator {
    /// Number of separator characters between two columns.
    pub spacing: usize,
    /// Maximal number of characters that fit in one line.
    pub line_width: usize,
    /// Fixed number of columns, or `None` to search for the best fit.
    pub num_columns: Option<usize>,
    /// Whether a single overwide column may exceed `line_width`.
    pub allow_exceeding: bool,
    /// Smallest width a column may be shrunk to in fixed mode, or
    /// `None` to forbid shrinking.
    pub min_shrink_width: Option<usize>,
}

impl Default for ColumnWidthCalculator {
    fn default() -> Self {
        Self::new(config::SPACING, config::LINE_WIDTH_FALLBACK)
    }
}

impl ColumnWidthCalculator {
    /// Calculator in free mode with the given spacing and line width.
    pub fn new(spacing: usize, line_width: usize) -> Self {
        ColumnWidthCalculator {
            spacing,
            line_width,
            num_columns: None,
            allow_exceeding: false,
            min_shrink_width: None,
        }
    }

    /// Switch to fixed mode with exactly `num_columns` columns.
    pub fn num_columns(mut self, num_columns: usize) -> Self {
        self.num_columns = Some(num_columns);
        self
    }

    /// Allow a single overwide column to exceed the line width.
    pub fn allow_exceeding(mut self, allow: bool) -> Self {
        self.allow_exceeding = allow;
        self
    }

    /// Allow fixed-mode configurations to shrink columns down to
    /// `width` characters when they would not fit otherwise.
    pub fn min_shrink_width(mut self, width: usize) -> Self {
        self.min_shrink_width = Some(width);
        self
    }

    /// Measure `items` and return the properties needed to render them.
    pub fn line_properties<S: AsRef<str>>(&self, items: &[S]) -> Result<LineProperties> {
        let item_widths: Vec<usize> = items
            .iter()
            .map(|item| measure_width(item.as_ref()))
            .collect();
        let cfg = self.calculate(&item_widths)?;
        Ok(LineProperties {
            column_widths: cfg.column_widths,
            spacing: self.spacing,
            num_lines: cfg.num_lines,
        })
    }

    /// Calculate a column configuration for the given item widths.
    ///
    /// In free mode this returns the configuration with the most
    /// columns that fits the line width. In fixed mode it returns the
    /// configuration for exactly the requested number of columns,
    /// shrunk if allowed and necessary.
    ///
    /// When nothing fits and exceeding is allowed, the fallback is a
    /// single column as wide as the widest item. That keeps overwide
    /// items untouched and leaves the wrapping to whoever displays the
    /// result. Exceeding never applies when more than one column was
    /// explicitly requested.
    pub fn calculate(&self, item_widths: &[usize]) -> Result<ColumnConfig> {
        if self.line_width == 0 {
            return Err(LayoutError::InvalidLineWidth);
        }
        if self.num_columns == Some(0) {
            return Err(LayoutError::InvalidColumns);
        }
        if item_widths.is_empty() {
            return Ok(ColumnConfig {
                column_widths: Vec::new(),
                num_lines: 0,
            });
        }
        match self.column_config(item_widths) {
            Err(LayoutError::InsufficientWidth)
                if self.allow_exceeding && matches!(self.num_columns, None | Some(1)) =>
            {
                let widest = item_widths.iter().copied().max().unwrap_or(0);
                Ok(ColumnConfig {
                    column_widths: vec![widest],
                    num_lines: item_widths.len(),
                })
            }
            result => result,
        }
    }

    fn column_config(&self, item_widths: &[usize]) -> Result<ColumnConfig> {
        let num_columns = match self.num_columns {
            Some(num_columns) => num_columns,
            None => return self.find_fitting_config(item_widths),
        };
        let cfg = Self::config_for_columns(item_widths, num_columns);
        if self.fits_in_line(&cfg.column_widths) {
            return Ok(cfg);
        }
        if self.min_shrink_width.is_none() {
            return Err(LayoutError::InsufficientWidth);
        }
        let column_widths = self.shrink_column_widths(&cfg.column_widths)?;
        Ok(ColumnConfig {
            column_widths,
            num_lines: cfg.num_lines,
        })
    }

    fn find_fitting_config(&self, item_widths: &[usize]) -> Result<ColumnConfig> {
        let max_columns = self.max_columns(item_widths);
        for cfg in self.candidate_configs(item_widths, max_columns) {
            if self.fits_in_line(&cfg.column_widths) {
                return Ok(cfg);
            }
        }
        Err(LayoutError::InsufficientWidth)
    }

    /// Upper bound on the number of columns worth trying.
    ///
    /// The bound assumes the best case of one widest column and all
    /// remaining columns as narrow as the smallest item. Configurations
    /// with more columns than this can never fit, so the search skips
    /// them.
    pub fn max_columns(&self, item_widths: &[usize]) -> usize {
        let num_items = item_widths.len();
        if num_items <= 1 {
            return num_items;
        }
        let smallest = item_widths.iter().copied().min().unwrap_or(0);
        let widest = item_widths.iter().copied().max().unwrap_or(0);
        if widest >= self.line_width {
            return 1;
        }
        let min_column_cost = self.spacing + smallest;
        if min_column_cost == 0 {
            return num_items;
        }
        let possible = 1 + (self.line_width - widest) / min_column_cost;
        possible.min(num_items)
    }

    /// Candidate configurations for decreasing column counts.
    ///
    /// Starts at `max_columns` and continues with one column less than
    /// the previous candidate actually produced, so column counts that
    /// would repeat the same chunking are skipped.
    pub fn candidate_configs<'a>(
        &self,
        item_widths: &'a [usize],
        max_columns: usize,
    ) -> impl Iterator<Item = ColumnConfig> + 'a {
        std::iter::successors(
            (max_columns > 0).then(|| Self::config_for_columns(item_widths, max_columns)),
            |cfg| {
                let next_columns = cfg.column_widths.len().saturating_sub(1);
                (next_columns > 0).then(|| Self::config_for_columns(item_widths, next_columns))
            },
        )
    }

    /// Column widths for at most `max_columns` columns.
    ///
    /// Items fill columns top to bottom. Each column is as wide as the
    /// widest item in its chunk. The result is unchecked against the
    /// line width and may hold fewer columns than requested when the
    /// items run out.
    pub fn config_for_columns(item_widths: &[usize], max_columns: usize) -> ColumnConfig {
        if item_widths.is_empty() || max_columns == 0 {
            return ColumnConfig {
                column_widths: Vec::new(),
                num_lines: 0,
            };
        }
        let num_lines = item_widths.len().div_ceil(max_columns);
        let column_widths = item_widths
            .chunks(num_lines)
            .map(|chunk| chunk.iter().copied().max().unwrap_or(0))
            .collect();
        ColumnConfig {
            column_widths,
            num_lines,
        }
    }

    /// Shrink `column_widths` until they fit the allowed line width.
    ///
    /// Columns are processed from the right. Columns already at or
    /// below the minimal width stay untouched, every other column gives
    /// up at most the remaining overshoot but never goes below the
    /// minimal width. Fails when the overshoot survives all columns.
    pub fn shrink_column_widths(&self, column_widths: &[usize]) -> Result<Vec<usize>> {
        let min_width = match self.min_shrink_width {
            Some(width) => width,
            None => return Err(LayoutError::InsufficientWidth),
        };
        let mut offset = self
            .used_line_width(column_widths)
            .saturating_sub(self.line_width);
        let mut processed = Vec::new();
        for &width in column_widths.iter().rev() {
            if offset == 0 {
                break;
            }
            if width <= min_width {
                processed.push(width);
            } else {
                let new_width = width.saturating_sub(offset).max(min_width);
                offset -= width - new_width;
                processed.push(new_width);
            }
        }
        if offset > 0 {
            return Err(LayoutError::InsufficientWidth);
        }
        let mut result = column_widths[..column_widths.len() - processed.len()].to_vec();
        result.extend(processed.into_iter().rev());
        Ok(result)
    }

    /// Whether columns of the given widths stay inside the line width.
    pub fn fits_in_line(&self, column_widths: &[usize]) -> bool {
        self.used_line_width(column_widths) <= self.line_width
    }

    /// Line width consumed by columns of the given widths, spacing
    /// between adjacent columns included.
    pub fn used_line_width(&self, column_widths: &[usize]) -> usize {
        let total: usize = column_widths.iter().sum();
        total + column_widths.len().saturating_sub(1) * self.spacing
    }
}
