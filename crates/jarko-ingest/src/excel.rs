//! XLSX loading with per-column type inference.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::file::{MAX_FILE_SIZE, check_file_with_limit, ensure_not_empty};
use crate::path::clean_path;

/// Which worksheet to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook.
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "at index {index}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Options for reading Excel workbooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcelOptions {
    pub sheet: SheetSelector,
    /// Zero-based row holding the column names, counted from the first
    /// non-empty row of the sheet. Rows above it are skipped. `None` means
    /// the sheet has no header and columns are named `column_1`, `column_2`, ...
    pub header: Option<usize>,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            sheet: SheetSelector::default(),
            header: Some(0),
        }
    }
}

impl ExcelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: Option<usize>) -> Self {
        self.header = header;
        self
    }
}

/// Reads one worksheet of an XLSX workbook into a DataFrame.
///
/// Column types are inferred from the cells: whole numbers become `Int64`,
/// other numbers `Float64`, booleans `Boolean`, anything else (or a mix)
/// `String`. Empty cells are nulls.
///
/// # Errors
///
/// File checks, [`IngestError::InvalidExcel`] when the file is not a
/// workbook, [`IngestError::SheetNotFound`], and [`IngestError::EmptyData`]
/// for a sheet without data rows.
pub fn load_xlsx(path: impl AsRef<Path>, options: &ExcelOptions) -> Result<DataFrame> {
    read_xlsx(&clean_path(path), options, MAX_FILE_SIZE)
}

pub(crate) fn read_xlsx(path: &Path, options: &ExcelOptions, max_size: u64) -> Result<DataFrame> {
    check_file_with_limit(path, max_size)?;

    let invalid = |e: calamine::XlsxError| IngestError::InvalidExcel {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(invalid)?;

    let sheet_names = workbook.sheet_names();
    let sheet = match &options.sheet {
        SheetSelector::Index(index) => sheet_names.get(*index).cloned(),
        SheetSelector::Name(name) => sheet_names.iter().find(|s| *s == name).cloned(),
    }
    .ok_or_else(|| IngestError::SheetNotFound {
        path: path.to_path_buf(),
        sheet: options.sheet.to_string(),
        available: sheet_names.clone(),
    })?;

    let range = workbook.worksheet_range(&sheet).map_err(invalid)?;
    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    let df = rows_to_frame(&rows, options.header)?;

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = df.height(),
        columns = df.width(),
        "Loaded XLSX sheet"
    );
    ensure_not_empty(df, path)
}

/// Builds a DataFrame from worksheet rows.
pub(crate) fn rows_to_frame(rows: &[Vec<Data>], header: Option<usize>) -> Result<DataFrame> {
    let (header_row, body) = match header {
        Some(index) if index < rows.len() => (Some(rows[index].as_slice()), &rows[index + 1..]),
        Some(_) => (None, &rows[rows.len()..]),
        None => (None, rows),
    };

    let width = body
        .iter()
        .map(Vec::len)
        .chain(header_row.map(<[Data]>::len))
        .max()
        .unwrap_or(0);
    let names = column_names(header_row, width);

    let columns = names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let cells: Vec<&Data> = body
                .iter()
                .map(|row| row.get(index).unwrap_or(&Data::Empty))
                .collect();
            build_column(name, &cells)
        })
        .collect::<Vec<_>>();

    Ok(DataFrame::new(columns)?)
}

fn column_names(header_row: Option<&[Data]>, width: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    (0..width)
        .map(|index| {
            let base = header_row
                .and_then(|row| row.get(index))
                .map(|cell| cell.to_string().trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("column_{}", index + 1));

            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Integer,
    Float,
    Boolean,
    Text,
}

/// Largest integer an f64 holds exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn cell_kind(cell: &Data) -> Option<CellKind> {
    match cell {
        Data::Empty => None,
        Data::Int(_) => Some(CellKind::Integer),
        Data::Float(value) if value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT => {
            Some(CellKind::Integer)
        }
        Data::Float(_) => Some(CellKind::Float),
        Data::Bool(_) => Some(CellKind::Boolean),
        _ => Some(CellKind::Text),
    }
}

fn infer_kind(cells: &[&Data]) -> CellKind {
    let mut inferred = None;
    for kind in cells.iter().filter_map(|cell| cell_kind(cell)) {
        inferred = Some(match (inferred, kind) {
            (None, kind) => kind,
            (Some(current), kind) if current == kind => current,
            (Some(CellKind::Integer | CellKind::Float), CellKind::Integer | CellKind::Float) => {
                CellKind::Float
            }
            _ => return CellKind::Text,
        });
    }
    inferred.unwrap_or(CellKind::Text)
}

fn build_column(name: String, cells: &[&Data]) -> Column {
    let name = PlSmallStr::from(name);
    let series = match infer_kind(cells) {
        CellKind::Integer => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Int(value) => Some(*value),
                    Data::Float(value) => Some(*value as i64),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        CellKind::Float => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Int(value) => Some(*value as f64),
                    Data::Float(value) => Some(*value),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        CellKind::Boolean => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Bool(value) => Some(*value),
                    _ => None,
                })
                .collect();
            Series::new(name, values)
        }
        CellKind::Text => {
            let values: Vec<Option<String>> = cells
                .iter()
                .map(|cell| match cell {
                    Data::Empty => None,
                    Data::String(value) => Some(value.clone()),
                    other => Some(other.to_string()),
                })
                .collect();
            Series::new(name, values)
        }
    };
    series.into_column()
}
