//! CSV loading with configurable separator and text encoding.

use std::io::Cursor;
use std::path::Path;

use encoding_rs::Encoding;
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::file::{MAX_FILE_SIZE, check_file_with_limit, ensure_not_empty, read_bytes};
use crate::path::clean_path;

/// Options for reading delimited text files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator. Must be a single ASCII character.
    pub separator: char,
    /// WHATWG encoding label such as `utf-8`, `latin1` or `windows-1252`.
    pub encoding: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            encoding: "utf-8".to_string(),
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    fn separator_byte(&self) -> Result<u8> {
        if self.separator.is_ascii() {
            Ok(self.separator as u8)
        } else {
            Err(IngestError::InvalidSeparator {
                separator: self.separator,
            })
        }
    }

    fn resolve_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes()).ok_or_else(|| {
            IngestError::UnknownEncoding {
                encoding: self.encoding.clone(),
            }
        })
    }
}

/// Reads a CSV file into a DataFrame. The first row is the header.
///
/// # Errors
///
/// File checks (missing, not a file, too large), [`IngestError::UnknownEncoding`],
/// [`IngestError::InvalidSeparator`], [`IngestError::Decode`] when the bytes are
/// not valid in the requested encoding, [`IngestError::CsvParse`], and
/// [`IngestError::EmptyData`] when there are no data rows.
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<DataFrame> {
    read_csv(&clean_path(path), options, MAX_FILE_SIZE)
}

pub(crate) fn read_csv(path: &Path, options: &CsvOptions, max_size: u64) -> Result<DataFrame> {
    check_file_with_limit(path, max_size)?;
    let separator = options.separator_byte()?;
    let encoding = options.resolve_encoding()?;

    let bytes = read_bytes(path)?;
    let text = decode(path, &bytes, encoding)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .map_parse_options(|parse| parse.with_separator(separator))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        encoding = encoding.name(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV"
    );
    ensure_not_empty(df, path)
}

/// Decodes `bytes` strictly and drops a leading byte order mark.
fn decode(path: &Path, bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| IngestError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn first_string(df: &DataFrame, column: &str) -> String {
        df.column(column)
            .unwrap()
            .str()
            .unwrap()
            .get(0)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_load_csv_defaults() {
        let file = create_temp_csv(b"nombre,edad\nAna,30\nLuis,41\n");
        let df = load_csv(file.path(), &CsvOptions::default()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("edad").unwrap().dtype(), &DataType::Int64);
        assert_eq!(first_string(&df, "nombre"), "Ana");
    }

    #[test]
    fn test_load_csv_custom_separator() {
        let file = create_temp_csv(b"nombre;ciudad\nAna;Madrid\n");
        let df = load_csv(file.path(), &CsvOptions::new().with_separator(';')).unwrap();
        assert_eq!(df.width(), 2);
        assert_eq!(first_string(&df, "ciudad"), "Madrid");
    }

    #[test]
    fn test_load_csv_latin1() {
        let file = create_temp_csv(b"nombre\nJos\xe9\n");
        let options = CsvOptions::new().with_encoding("latin1");
        let df = load_csv(file.path(), &options).unwrap();
        assert_eq!(first_string(&df, "nombre"), "José");

        let err = load_csv(file.path(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::Decode { encoding: "UTF-8", .. }));
    }

    #[test]
    fn test_load_csv_strips_bom() {
        let file = create_temp_csv("\u{feff}nombre,edad\nAna,30\n".as_bytes());
        let df = load_csv(file.path(), &CsvOptions::default()).unwrap();
        assert!(df.column("nombre").is_ok());
    }

    #[test]
    fn test_load_csv_empty() {
        let file = create_temp_csv(b"");
        let err = load_csv(file.path(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyData { .. }));

        let header_only = create_temp_csv(b"nombre,edad\n");
        let err = load_csv(header_only.path(), &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyData { .. }));
    }

    #[test]
    fn test_load_csv_bad_options() {
        let file = create_temp_csv(b"a\n1\n");

        let err = load_csv(file.path(), &CsvOptions::new().with_encoding("klingon")).unwrap_err();
        assert!(matches!(err, IngestError::UnknownEncoding { .. }));

        let err = load_csv(file.path(), &CsvOptions::new().with_separator('¦')).unwrap_err();
        assert!(matches!(err, IngestError::InvalidSeparator { separator: '¦' }));
    }

    #[test]
    fn test_load_csv_trims_path() {
        let file = create_temp_csv(b"a\n1\n");
        let padded = format!("  {}  ", file.path().display());
        let df = load_csv(padded, &CsvOptions::default()).unwrap();
        assert_eq!(df.height(), 1);
    }
}
