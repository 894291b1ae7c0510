//! Parquet loading with optional column projection.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::file::{MAX_FILE_SIZE, check_file_with_limit, ensure_not_empty, open};
use crate::path::clean_path;

/// Options for reading Parquet files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParquetOptions {
    /// Columns to read, in this order. `None` reads every column.
    pub columns: Option<Vec<String>>,
}

impl ParquetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

/// Reads a Parquet file into a DataFrame.
///
/// Requested columns are checked against the file schema before any data is
/// read.
///
/// # Errors
///
/// File checks, [`IngestError::InvalidParquet`], [`IngestError::ColumnNotFound`]
/// and [`IngestError::EmptyData`].
pub fn load_parquet(path: impl AsRef<Path>, options: &ParquetOptions) -> Result<DataFrame> {
    read_parquet(&clean_path(path), options, MAX_FILE_SIZE)
}

pub(crate) fn read_parquet(
    path: &Path,
    options: &ParquetOptions,
    max_size: u64,
) -> Result<DataFrame> {
    check_file_with_limit(path, max_size)?;

    let invalid = |e: PolarsError| IngestError::InvalidParquet {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = ParquetReader::new(open(path)?);
    let schema = reader.schema().map_err(invalid)?;

    if let Some(columns) = &options.columns
        && let Some(missing) = columns.iter().find(|name| !schema.contains(name.as_str()))
    {
        return Err(IngestError::ColumnNotFound {
            column: missing.clone(),
            path: path.to_path_buf(),
        });
    }

    let mut df = reader
        .with_columns(options.columns.clone())
        .finish()
        .map_err(invalid)?;
    if let Some(columns) = &options.columns {
        df = df.select(columns.iter().map(String::as_str))?;
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded Parquet"
    );
    ensure_not_empty(df, path)
}
