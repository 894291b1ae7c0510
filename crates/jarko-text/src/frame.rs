//! Column-level normalization for Polars DataFrames.

use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

use crate::error::{Result, TextError};
use crate::options::NormalizationOptions;
use crate::pipeline::normalize_str;

/// Returns a copy of `df` with every value of `column` normalized.
///
/// Non-string columns are cast to strings first. Null cells stay null.
///
/// # Errors
///
/// [`TextError::ColumnNotFound`] when the column is missing, plus any
/// options validation or Polars failure.
pub fn normalize_column(
    df: &DataFrame,
    column: &str,
    options: &NormalizationOptions,
) -> Result<DataFrame> {
    normalize_columns(df, &[column], options)
}

/// Normalizes several columns at once. See [`normalize_column`].
pub fn normalize_columns(
    df: &DataFrame,
    columns: &[&str],
    options: &NormalizationOptions,
) -> Result<DataFrame> {
    options.validate()?;

    let mut result = df.clone();
    for &name in columns {
        let series = normalized_series(df, name, options)?;
        result.with_column(series)?;
        tracing::debug!(column = name, rows = df.height(), "Normalized column");
    }
    Ok(result)
}

fn normalized_series(df: &DataFrame, name: &str, options: &NormalizationOptions) -> Result<Series> {
    let source = df
        .column(name)
        .map_err(|_| TextError::ColumnNotFound {
            column: name.to_string(),
        })?;
    let as_text = source.cast(&DataType::String)?;
    let values = as_text.str()?;

    let normalized: Vec<Option<String>> = values
        .into_iter()
        .map(|value| value.map(|text| normalize_str(text, options)))
        .collect();

    Ok(Series::new(source.name().clone(), normalized))
}
