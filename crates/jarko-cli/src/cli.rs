//! CLI argument definitions for `jarko`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jarko",
    version,
    about = "Normalize free text and load tabular files",
    long_about = "Normalize free text (accents, typographic symbols, case, spacing) \
                  and load CSV, XLSX or Parquet files into tables.\n\n\
                  Text is read from arguments, or from stdin one line at a time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each log event.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize text given as arguments or read from stdin.
    Normalize(NormalizeArgs),

    /// Load a file and print its shape, schema and first rows.
    Load(LoadArgs),

    /// Load a file, normalize one column and print a before/after preview.
    NormalizeColumn(NormalizeColumnArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Text to normalize. Reads stdin line by line when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    #[command(flatten)]
    pub options: NormalizeFlags,
}

/// Pipeline switches shared by `normalize` and `normalize-column`.
#[derive(Args, Default)]
pub struct NormalizeFlags {
    /// JSON file with normalization options; flags below are applied on top.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep accents and other diacritics.
    #[arg(long = "keep-accents")]
    pub keep_accents: bool,

    /// Do not lowercase.
    #[arg(long = "keep-case")]
    pub keep_case: bool,

    /// Do not collapse or trim whitespace.
    #[arg(long = "keep-whitespace")]
    pub keep_whitespace: bool,

    /// Do not replace typographic and special characters.
    #[arg(long = "keep-special")]
    pub keep_special: bool,

    /// Keep the original case even if lowercasing is enabled.
    #[arg(long = "preserve-case")]
    pub preserve_case: bool,

    /// Uppercase the normalized result.
    #[arg(long = "upper", conflicts_with = "preserve_case")]
    pub upper: bool,

    /// Extra substitution, repeatable (e.g. --substitute '©=(c)').
    #[arg(long = "substitute", value_name = "FROM=TO", value_parser = parse_substitution)]
    pub substitute: Vec<(String, String)>,
}

#[derive(Args)]
pub struct LoadArgs {
    /// CSV, XLSX or Parquet file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Number of rows to print.
    #[arg(long = "rows", default_value_t = 10)]
    pub rows: usize,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Args)]
pub struct NormalizeColumnArgs {
    /// CSV, XLSX or Parquet file.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Column to normalize.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// Number of rows to preview.
    #[arg(long = "rows", default_value_t = 10)]
    pub rows: usize,

    #[command(flatten)]
    pub options: NormalizeFlags,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Reader options shared by the file commands.
#[derive(Args)]
pub struct FormatArgs {
    /// CSV field separator.
    #[arg(long = "separator", default_value_t = ',')]
    pub separator: char,

    /// CSV text encoding (utf-8, latin1, windows-1252, ...).
    #[arg(long = "encoding", default_value = "utf-8")]
    pub encoding: String,

    /// Excel sheet position, starting at 0.
    #[arg(long = "sheet", default_value_t = 0, conflicts_with = "sheet_name")]
    pub sheet: usize,

    /// Excel sheet name.
    #[arg(long = "sheet-name", value_name = "NAME")]
    pub sheet_name: Option<String>,

    /// Excel sheet has no header row.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Parquet columns to read (comma separated).
    #[arg(long = "columns", value_name = "NAME", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// How tables are drawn.
    #[arg(long = "table-style", value_enum, default_value = "rounded")]
    pub table_style: TableStyleArg,
}

/// Table rendering choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TableStyleArg {
    Rounded,
    Markdown,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parses `FROM=TO`. Only the first `=` splits, so `TO` may contain `=`.
pub fn parse_substitution(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some(("", _)) => Err("substitution source must not be empty".to_string()),
        Some((from, to)) => Ok((from.to_string(), to.to_string())),
        None => Err(format!("expected FROM=TO, got '{value}'")),
    }
}
