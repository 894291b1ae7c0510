use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use jarko_ingest::{CsvOptions, ExcelOptions, LoadOptions, ParquetOptions, SheetSelector, load};
use jarko_text::{
    NormalizationOptions, Normalizer, TracingObserver, normalize_column, to_upper,
};

use crate::cli::{
    FormatArgs, LoadArgs, NormalizeArgs, NormalizeColumnArgs, NormalizeFlags, TableStyleArg,
};
use crate::summary::{TableStyle, frame_table, preview_table, schema_table};

/// Normalizes the argument texts, or each line of `input` when there are none,
/// writing one result per line.
pub fn run_normalize(args: &NormalizeArgs, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let normalizer = Normalizer::new(normalization_options(&args.options)?)
        .with_observer(Arc::new(TracingObserver));

    if args.text.is_empty() {
        for line in input.lines() {
            let line = line.context("read stdin")?;
            let result = normalize_one(&normalizer, &line, args.options.upper)?;
            writeln!(out, "{result}")?;
        }
    } else {
        for text in &args.text {
            let result = normalize_one(&normalizer, text, args.options.upper)?;
            writeln!(out, "{result}")?;
        }
    }
    Ok(())
}

fn normalize_one(normalizer: &Normalizer, text: &str, upper: bool) -> Result<String> {
    let normalized = normalizer.normalize(text)?;
    if upper {
        Ok(to_upper(normalized)?)
    } else {
        Ok(normalized)
    }
}

/// Loads a file and writes its shape, schema and first rows.
pub fn run_load(args: &LoadArgs, out: &mut impl Write) -> Result<()> {
    let df = load_frame(&args.path, &args.format)?;
    let style = table_style(args.format.table_style);

    writeln!(out, "Shape: {} rows x {} columns", df.height(), df.width())?;
    writeln!(out, "{}", schema_table(&df, style))?;
    writeln!(out, "{}", frame_table(&df, args.rows, style)?)?;
    if df.height() > args.rows {
        writeln!(out, "... {} more rows", df.height() - args.rows)?;
    }
    Ok(())
}

/// Loads a file, normalizes one column and writes a before/after preview.
pub fn run_normalize_column(args: &NormalizeColumnArgs, out: &mut impl Write) -> Result<()> {
    let span = info_span!("normalize_column", column = %args.column);
    let _guard = span.enter();

    let options = normalization_options(&args.options)?;
    let df = load_frame(&args.path, &args.format)?;
    let normalized = normalize_column(&df, &args.column, &options)
        .with_context(|| format!("normalize column '{}'", args.column))?;
    info!(rows = normalized.height(), "Normalized column");

    let mut after = normalized.column(&args.column)?.clone();
    if args.options.upper {
        let upper: Vec<Option<String>> = after
            .str()?
            .into_iter()
            .map(|value| value.map(str::to_uppercase))
            .collect();
        after = polars::prelude::Column::new(after.name().clone(), upper);
    }

    let style = table_style(args.format.table_style);
    let table = preview_table(df.column(&args.column)?, &after, args.rows, style)?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Builds pipeline options: the `--config` file (or defaults), then the flags.
pub fn normalization_options(flags: &NormalizeFlags) -> Result<NormalizationOptions> {
    let mut options = match &flags.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            NormalizationOptions::from_json_str(&json)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => NormalizationOptions::default(),
    };

    if flags.keep_accents {
        options.strip_accents = false;
    }
    if flags.keep_case {
        options.lowercase = false;
    }
    if flags.keep_whitespace {
        options.clean_whitespace = false;
    }
    if flags.keep_special {
        options.substitute_chars = false;
    }
    if flags.preserve_case {
        options.preserve_case = true;
    }
    if !flags.substitute.is_empty() {
        let mut table = options.custom_substitutions.take().unwrap_or_default();
        for (from, to) in &flags.substitute {
            table.insert(from.as_str(), to.as_str());
        }
        options.custom_substitutions = Some(table);
    }

    options.validate()?;
    debug!(?options, "Normalization options");
    Ok(options)
}

/// Translates the format flags into reader options.
pub fn load_options(format: &FormatArgs) -> LoadOptions {
    let sheet = match &format.sheet_name {
        Some(name) => SheetSelector::Name(name.clone()),
        None => SheetSelector::Index(format.sheet),
    };
    let parquet = if format.columns.is_empty() {
        ParquetOptions::default()
    } else {
        ParquetOptions::new().with_columns(format.columns.iter().cloned())
    };

    LoadOptions::new()
        .with_csv(
            CsvOptions::new()
                .with_separator(format.separator)
                .with_encoding(format.encoding.clone()),
        )
        .with_excel(
            ExcelOptions::new()
                .with_sheet(sheet)
                .with_header(if format.no_header { None } else { Some(0) }),
        )
        .with_parquet(parquet)
}

fn load_frame(path: &std::path::Path, format: &FormatArgs) -> Result<DataFrame> {
    let options = load_options(format);
    let df = load(path, &options).with_context(|| format!("load {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded file"
    );
    Ok(df)
}

fn table_style(arg: TableStyleArg) -> TableStyle {
    match arg {
        TableStyleArg::Rounded => TableStyle::Rounded,
        TableStyleArg::Markdown => TableStyle::Markdown,
    }
}
