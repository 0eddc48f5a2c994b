//! Directory listings for columnizing.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Names of the entries in the directory at `path`.
///
/// The order is whatever the operating system reports. With
/// `hide_dotted` set, names starting with a dot are skipped.
pub fn dir_entries(path: impl AsRef<Path>, hide_dotted: bool) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if hide_dotted && name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}
