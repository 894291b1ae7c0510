//! Error types for tabular file loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a file into a DataFrame.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// The path does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The path exists but is a directory or other non-regular file.
    #[error("not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// File exceeds the configured size limit.
    #[error("file too large: {path} is {size} bytes (limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The process may not read the file.
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Any other I/O failure.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is not one of the supported formats.
    #[error(
        "unsupported file format '{extension}' for {path}; supported formats: .csv, .xlsx, .parquet"
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The file loaded but holds no rows.
    #[error("file contains no data: {path}")]
    EmptyData { path: PathBuf },

    // === CSV Errors ===
    /// Encoding label not known to the WHATWG encoding standard.
    #[error("unknown encoding '{encoding}'")]
    UnknownEncoding { encoding: String },

    /// Separator must be a single ASCII character.
    #[error("invalid separator '{separator}': must be a single ASCII character")]
    InvalidSeparator { separator: char },

    /// Bytes are not valid in the requested encoding.
    #[error("failed to decode {path} as {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Excel Errors ===
    /// Not a readable XLSX workbook.
    #[error("invalid Excel workbook {path}: {message}")]
    InvalidExcel { path: PathBuf, message: String },

    /// Requested sheet is not in the workbook.
    #[error("sheet {sheet} not found in {path}; available sheets: {}", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    // === Parquet Errors ===
    /// Not a readable Parquet file.
    #[error("invalid Parquet file {path}: {message}")]
    InvalidParquet { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Requested column not present in the file.
    #[error("column '{column}' not found in {path}")]
    ColumnNotFound { column: String, path: PathBuf },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

/// Coarse error categories shared with callers that do not care about the
/// exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidFormat,
    UnsupportedFormat,
    ResourceExhausted,
    InvalidArgument,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::InvalidFormat => "invalid format",
            Self::UnsupportedFormat => "unsupported format",
            Self::ResourceExhausted => "resource exhausted",
            Self::InvalidArgument => "invalid argument",
            Self::Io => "i/o",
        };
        f.write_str(name)
    }
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } => ErrorKind::NotFound,
            Self::NotAFile { .. } | Self::PermissionDenied { .. } | Self::FileRead { .. } => {
                ErrorKind::Io
            }
            Self::FileTooLarge { .. } => ErrorKind::ResourceExhausted,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::UnknownEncoding { .. }
            | Self::InvalidSeparator { .. }
            | Self::SheetNotFound { .. }
            | Self::ColumnNotFound { .. } => ErrorKind::InvalidArgument,
            Self::EmptyData { .. }
            | Self::Decode { .. }
            | Self::CsvParse { .. }
            | Self::InvalidExcel { .. }
            | Self::InvalidParquet { .. }
            | Self::DataFrame { .. } => ErrorKind::InvalidFormat,
        }
    }

    /// Maps an I/O error on `path` to the matching variant.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::FileRead { path, source },
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
