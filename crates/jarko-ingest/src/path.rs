//! Path cleanup for user-supplied file names.

use std::path::{Path, PathBuf};

/// Trims leading and trailing whitespace from a textual path.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn clean_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(text) => PathBuf::from(text.trim()),
        None => path.to_path_buf(),
    }
}
