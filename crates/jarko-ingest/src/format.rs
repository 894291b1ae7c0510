//! Supported file formats and extension dispatch.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// A tabular file format recognised by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Parquet,
}

impl FileFormat {
    /// All supported formats, in the order they are listed to users.
    pub const ALL: [FileFormat; 3] = [Self::Csv, Self::Xlsx, Self::Parquet];

    /// Detects the format from the file extension.
    ///
    /// The comparison ignores case and surrounding whitespace, so `DATA.CSV`
    /// and `data.csv ` are both CSV.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.trim().to_ascii_lowercase())
            .unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
            .ok_or_else(|| IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    "<none>".to_string()
                } else {
                    format!(".{extension}")
                },
            })
    }

    /// Lowercase extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Parquet => "parquet",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "CSV",
            Self::Xlsx => "XLSX",
            Self::Parquet => "Parquet",
        };
        f.write_str(name)
    }
}
