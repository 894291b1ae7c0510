//! Pre-load file checks.

use std::fs::File;
use std::path::Path;

use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};

/// Maximum file size for loading (500 MB default).
pub const MAX_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Checks that `path` is an existing regular file within the default size limit.
pub fn check_file(path: &Path) -> Result<u64> {
    check_file_with_limit(path, MAX_FILE_SIZE)
}

/// Checks that `path` is an existing regular file no larger than `max_size`.
///
/// Returns the file size in bytes.
pub fn check_file_with_limit(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if !metadata.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(metadata.len())
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| IngestError::from_io(path, e))
}

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| IngestError::from_io(path, e))
}

/// Rejects frames without rows.
pub(crate) fn ensure_not_empty(df: DataFrame, path: &Path) -> Result<DataFrame> {
    if df.height() == 0 {
        return Err(IngestError::EmptyData {
            path: path.to_path_buf(),
        });
    }
    Ok(df)
}
