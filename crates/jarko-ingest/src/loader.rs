//! Format dispatch for tabular files.

use std::path::Path;

use polars::prelude::DataFrame;

use crate::csv::{CsvOptions, read_csv};
use crate::error::{IngestError, Result};
use crate::excel::{ExcelOptions, read_xlsx};
use crate::file::MAX_FILE_SIZE;
use crate::format::FileFormat;
use crate::parquet::{ParquetOptions, read_parquet};
use crate::path::clean_path;

/// Options for [`load`], one block per format plus the shared size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub csv: CsvOptions,
    pub excel: ExcelOptions,
    pub parquet: ParquetOptions,
    /// Files larger than this many bytes are rejected before reading.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            csv: CsvOptions::default(),
            excel: ExcelOptions::default(),
            parquet: ParquetOptions::default(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }

    #[must_use]
    pub fn with_excel(mut self, excel: ExcelOptions) -> Self {
        self.excel = excel;
        self
    }

    #[must_use]
    pub fn with_parquet(mut self, parquet: ParquetOptions) -> Self {
        self.parquet = parquet;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Loads a CSV, XLSX or Parquet file, picking the reader from the extension.
///
/// The path is trimmed of surrounding whitespace, then checked for existence
/// before the extension is looked at.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] when nothing exists at the path,
/// [`IngestError::UnsupportedFormat`] for other extensions, and any error of
/// the chosen reader.
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<DataFrame> {
    let path = clean_path(path);
    if !path.exists() {
        return Err(IngestError::FileNotFound { path });
    }

    let format = FileFormat::from_path(&path)?;
    tracing::debug!(path = %path.display(), %format, "Loading file");

    match format {
        FileFormat::Csv => read_csv(&path, &options.csv, options.max_file_size),
        FileFormat::Xlsx => read_xlsx(&path, &options.excel, options.max_file_size),
        FileFormat::Parquet => read_parquet(&path, &options.parquet, options.max_file_size),
    }
}
