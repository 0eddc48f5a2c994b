//! Character-based measurement, padding, and slicing of items.
//!
//! All widths in this crate are counts of `char`s, not bytes. A
//! multi-byte character such as `ä` occupies one unit of width, so
//! column math stays independent of the encoding of the input.

/// Width of `s` in characters.
///
/// # Example
///
/// ```
/// use pilaster::measure_width;
///
/// assert_eq!(measure_width("spam"), 4);
/// assert_eq!(measure_width("späm"), 4);
/// ```
pub fn measure_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-justify `s` to exactly `width` characters.
///
/// Shorter strings are padded with blanks on the right, longer strings
/// are cut after `width` characters. The result is always exactly
/// `width` characters wide.
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    format!("{s:<width$.width$}")
}

/// Cut `s` after `width` characters without padding.
pub fn truncate(s: &str, width: usize) -> String {
    format!("{s:.width$}")
}

/// The characters of `s` at positions `start..end`.
///
/// Positions beyond the end of the string clamp to its end, so the
/// result may be shorter than requested or empty.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let mut offsets = s.char_indices().map(|(offset, _)| offset);
    let begin = match offsets.by_ref().nth(start) {
        Some(offset) => offset,
        None => return "",
    };
    match offsets.nth(end - start - 1) {
        Some(offset) => &s[begin..offset],
        None => &s[begin..],
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn padded_string_has_requested_width(s in ".{0,20}", width in 0usize..40) {
            let padded = pad_or_truncate(&s, width);
            prop_assert_eq!(measure_width(&padded), width);
        }

        #[test]
        fn truncated_string_never_exceeds_width(s in ".{0,20}", width in 0usize..40) {
            let cut = truncate(&s, width);
            prop_assert!(measure_width(&cut) <= width);
            prop_assert!(s.starts_with(&cut));
        }

        #[test]
        fn slices_reassemble_the_string(s in ".{0,30}", step in 1usize..8) {
            let len = measure_width(&s);
            let mut joined = String::new();
            let mut start = 0;
            while start < len {
                joined.push_str(char_slice(&s, start, start + step));
                start += step;
            }
            prop_assert_eq!(joined, s);
        }
    }
}
