//! Terminal width detection.

use std::io::{stdout, IsTerminal};

use terminal_size::{terminal_size, Width};

use crate::config;
use crate::error::{LayoutError, Result};

/// What is known about the terminal attached to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalInfo {
    /// Usable line width in characters.
    pub width: usize,
    /// Whether the width came from a real terminal. False means the
    /// fallback width is in effect, for example because output is
    /// piped.
    pub is_terminal: bool,
}

/// Width of the attached terminal in characters.
pub fn terminal_width() -> Result<usize> {
    match terminal_size() {
        Some((Width(width), _)) => Ok(width as usize),
        None => Err(LayoutError::TerminalWidth),
    }
}

/// Terminal info for stdout.
///
/// Falls back to a width of [`config::LINE_WIDTH_FALLBACK`] when
/// detection fails or stdout is not a terminal.
pub fn detect() -> TerminalInfo {
    match terminal_width() {
        Ok(width) if stdout().is_terminal() => TerminalInfo {
            width,
            is_terminal: true,
        },
        _ => TerminalInfo {
            width: config::LINE_WIDTH_FALLBACK,
            is_terminal: false,
        },
    }
}
