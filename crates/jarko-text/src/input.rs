//! Input coercion.
//!
//! Every public normalization function accepts anything convertible into a
//! [`TextInput`]. The enum spells out which values have a canonical text form;
//! `Null` and `Unsupported` values are rejected before any transform runs.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use polars::prelude::AnyValue;

use crate::error::{Result, TextError};

/// A value that can be normalized as text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextInput {
    /// Absent value. Always rejected.
    Null,
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    Sequence(Vec<TextInput>),
    Mapping(Vec<(TextInput, TextInput)>),
    /// A value with no textual representation, tagged with its type name.
    Unsupported(&'static str),
}

impl TextInput {
    /// Returns true for [`TextInput::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts the value to its canonical text form.
    ///
    /// `function` names the caller in the error message.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidInput`] for `Null` and for any value that
    /// is, or contains, an `Unsupported` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jarko_text::TextInput;
    ///
    /// assert_eq!(TextInput::from(123).into_text("demo").unwrap(), "123");
    /// assert_eq!(TextInput::from(45.67).into_text("demo").unwrap(), "45.67");
    /// assert_eq!(TextInput::from(vec!["a", "b"]).into_text("demo").unwrap(), "[a, b]");
    /// assert!(TextInput::Null.into_text("demo").is_err());
    /// ```
    pub fn into_text(self, function: &'static str) -> Result<String> {
        match self {
            Self::Null => Err(TextError::null_input(function)),
            Self::Text(text) => Ok(text),
            other => {
                let mut out = String::new();
                other.write_canonical(&mut out, function)?;
                Ok(out)
            }
        }
    }

    fn write_canonical(&self, out: &mut String, function: &'static str) -> Result<()> {
        match self {
            // Only the top-level value is required to be present.
            Self::Null => out.push_str("null"),
            Self::Text(text) => out.push_str(text),
            Self::Integer(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Unsigned(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Float(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Boolean(v) => {
                let _ = write!(out, "{v}");
            }
            Self::Sequence(items) => {
                out.push('[');
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    item.write_canonical(out, function)?;
                }
                out.push(']');
            }
            Self::Mapping(entries) => {
                out.push('{');
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        out.push_str(", ");
                    }
                    key.write_canonical(out, function)?;
                    out.push_str(": ");
                    value.write_canonical(out, function)?;
                }
                out.push('}');
            }
            Self::Unsupported(kind) => {
                return Err(TextError::InvalidInput {
                    function,
                    reason: format!("values of type {kind} cannot be converted to text"),
                });
            }
        }
        Ok(())
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for TextInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for TextInput {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for TextInput {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for TextInput {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for TextInput {
            fn from(value: $ty) -> Self {
                Self::Integer(i64::from(value))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for TextInput {
            fn from(value: $ty) -> Self {
                Self::Unsigned(u64::from(value))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for TextInput {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<f64> for TextInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for TextInput {
    fn from(value: f32) -> Self {
        // Widen through the shortest f32 display so 0.1f32 stays "0.1".
        Self::Float(
            value
                .to_string()
                .parse::<f64>()
                .unwrap_or_else(|_| f64::from(value)),
        )
    }
}

impl<T: Into<TextInput>> From<Option<T>> for TextInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<TextInput>> From<Vec<T>> for TextInput {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<TextInput>, V: Into<TextInput>> From<BTreeMap<K, V>> for TextInput {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Mapping(
            map.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<AnyValue<'_>> for TextInput {
    fn from(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Self::Null,
            AnyValue::Boolean(v) => Self::Boolean(v),
            AnyValue::Int8(v) => Self::from(v),
            AnyValue::Int16(v) => Self::from(v),
            AnyValue::Int32(v) => Self::from(v),
            AnyValue::Int64(v) => Self::from(v),
            AnyValue::UInt8(v) => Self::from(v),
            AnyValue::UInt16(v) => Self::from(v),
            AnyValue::UInt32(v) => Self::from(v),
            AnyValue::UInt64(v) => Self::from(v),
            AnyValue::Float32(v) => Self::from(v),
            AnyValue::Float64(v) => Self::from(v),
            AnyValue::String(s) => Self::from(s),
            AnyValue::StringOwned(s) => Self::Text(s.to_string()),
            AnyValue::List(series) => Self::Sequence(series.iter().map(Self::from).collect()),
            AnyValue::Binary(_) | AnyValue::BinaryOwned(_) => Self::Unsupported("binary"),
            // Temporal and nested values use Polars' display, minus surrounding quotes
            other => {
                let s = other.to_string();
                if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                    Self::Text(s[1..s.len() - 1].to_string())
                } else {
                    Self::Text(s)
                }
            }
        }
    }
}
