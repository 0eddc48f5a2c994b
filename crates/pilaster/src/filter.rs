//! Shell-style filtering of item names.

use globset::{Glob, GlobMatcher};

use crate::error::Result;
use crate::items::Items;

/// Keep only the items whose name matches `pattern`.
///
/// Matching follows shell rules: `*` matches any run of characters,
/// `?` a single character, and the whole name must match, so `x*`
/// keeps the names starting with `x`. Mappings are filtered by key.
///
/// # Example
///
/// ```
/// use pilaster::{filter_names, Items};
///
/// let items = Items::sequence(["spam", "ham", "eggs"]);
/// let filtered = filter_names(items, "*am").unwrap();
/// assert_eq!(filtered, Items::sequence(["spam", "ham"]));
/// ```
pub fn filter_names(items: Items, pattern: &str) -> Result<Items> {
    let matcher = compile(pattern)?;
    Ok(match items {
        Items::Sequence(items) => Items::Sequence(
            items
                .into_iter()
                .filter(|item| matcher.is_match(item))
                .collect(),
        ),
        Items::Mapping(pairs) => Items::Mapping(
            pairs
                .into_iter()
                .filter(|(key, _)| matcher.is_match(key))
                .collect(),
        ),
    })
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)?.compile_matcher())
}
