//! Extension dispatch and shared guards of `load`.

use std::fs::{self, File};
use std::path::PathBuf;

use jarko_ingest::{
    CsvOptions, ErrorKind, ExcelOptions, IngestError, LoadOptions, ParquetOptions, SheetSelector,
    load,
};
use polars::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loads_csv_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "VENTAS.CSV", b"producto,precio\nCafe,2.5\nTe,1.8\n");

    let df = load(&path, &LoadOptions::default()).unwrap();
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(df.column("precio").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn csv_options_flow_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "ventas.csv", b"producto;ciudad\nCaf\xe9;Le\xf3n\n");
    let options = LoadOptions::new().with_csv(
        CsvOptions::new()
            .with_separator(';')
            .with_encoding("windows-1252"),
    );

    let df = load(&path, &options).unwrap();
    let cities = df.column("ciudad").unwrap().str().unwrap();
    assert_eq!(cities.get(0), Some("León"));
}

#[test]
fn loads_parquet_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datos.parquet");
    let mut df = df! {
        "id" => [1i64, 2, 3],
        "nombre" => ["Ana", "Luis", "Eva"],
    }
    .unwrap();
    ParquetWriter::new(File::create(&path).unwrap())
        .finish(&mut df)
        .unwrap();

    let options = LoadOptions::new().with_parquet(ParquetOptions::new().with_columns(["nombre"]));
    let loaded = load(&path, &options).unwrap();
    assert_eq!(loaded.shape(), (3, 1));
}

#[test]
fn path_whitespace_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.csv", b"x\n1\n");
    let padded = format!("  {}\t", path.display());

    assert_eq!(load(padded, &LoadOptions::default()).unwrap().height(), 1);
}

#[test]
fn missing_file_is_not_found_before_format_check() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("nada.txt"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "notas.txt", b"hola");
    let err = load(&path, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    assert!(err.to_string().contains(".csv, .xlsx, .parquet"));
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carpeta.csv");
    fs::create_dir(&path).unwrap();
    let err = load(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::NotAFile { .. }));
}

#[test]
fn size_limit_applies_to_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "grande.csv", b"x\n1\n2\n3\n");
    let options = LoadOptions::new().with_max_file_size(4);
    let err = load(&path, &options).unwrap_err();
    assert!(matches!(err, IngestError::FileTooLarge { max_size: 4, .. }));
    assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
}

#[test]
fn header_only_csv_is_empty_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "vacio.csv", b"a,b,c\n");
    let err = load(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyData { .. }));
}

#[test]
fn corrupt_workbook_is_invalid_excel() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "libro.xlsx", b"this is not a zip archive");
    let options = LoadOptions::new().with_excel(
        ExcelOptions::new()
            .with_sheet(SheetSelector::Name("Hoja1".to_string()))
            .with_header(None),
    );
    let err = load(&path, &options).unwrap_err();
    assert!(matches!(err, IngestError::InvalidExcel { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
}
