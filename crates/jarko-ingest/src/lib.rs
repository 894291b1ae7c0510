//! Tabular file loading.
//!
//! This crate reads CSV, XLSX and Parquet files into Polars DataFrames behind
//! a single entry point that dispatches on the file extension.
//!
//! # Features
//!
//! - **CSV**: configurable separator and any WHATWG text encoding
//! - **XLSX**: sheet by index or name, optional header row, inferred column types
//! - **Parquet**: optional column projection checked against the file schema
//! - **Guards**: existence, regular-file and size checks before reading;
//!   empty results are rejected
//!
//! # Example
//!
//! ```no_run
//! use jarko_ingest::{CsvOptions, LoadOptions, load};
//!
//! let options = LoadOptions::new().with_csv(CsvOptions::new().with_separator(';'));
//! let df = load(" datos/ventas.csv ", &options)?;
//! println!("{} rows", df.height());
//! # Ok::<(), jarko_ingest::IngestError>(())
//! ```

mod csv;
mod error;
mod excel;
mod file;
mod format;
mod loader;
mod parquet;
mod path;

// === Error Types ===
pub use error::{ErrorKind, IngestError, Result};

// === Paths and Formats ===
pub use file::{MAX_FILE_SIZE, check_file, check_file_with_limit};
pub use format::FileFormat;
pub use path::clean_path;

// === Readers ===
pub use csv::{CsvOptions, load_csv};
pub use excel::{ExcelOptions, SheetSelector, load_xlsx};
pub use loader::{LoadOptions, load};
pub use parquet::{ParquetOptions, load_parquet};
