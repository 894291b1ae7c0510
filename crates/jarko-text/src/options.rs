//! Normalization pipeline configuration.

use serde_json::{Map, Value};

use crate::error::{Result, TextError};
use crate::substitution::SubstitutionTable;

const FLAG_KEYS: [&str; 5] = [
    "strip_accents",
    "lowercase",
    "clean_whitespace",
    "substitute_chars",
    "preserve_case",
];

const CUSTOM_SUBSTITUTIONS_KEY: &str = "custom_substitutions";

/// Toggles for [`crate::normalize`].
///
/// The step order is fixed; only whether each step runs is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Remove accents and diacritics (default: true).
    pub strip_accents: bool,
    /// Lowercase the text (default: true). Ignored when `preserve_case` is set.
    pub lowercase: bool,
    /// Collapse whitespace and tighten punctuation spacing (default: true).
    pub clean_whitespace: bool,
    /// Replace typographic and special characters (default: true).
    pub substitute_chars: bool,
    /// Extra substitutions layered over the default table.
    pub custom_substitutions: Option<SubstitutionTable>,
    /// Never change letter case, even if `lowercase` is set (default: false).
    pub preserve_case: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            strip_accents: true,
            lowercase: true,
            clean_whitespace: true,
            substitute_chars: true,
            custom_substitutions: None,
            preserve_case: false,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// All steps disabled; the pipeline only coerces its input.
    pub fn none() -> Self {
        Self {
            strip_accents: false,
            lowercase: false,
            clean_whitespace: false,
            substitute_chars: false,
            custom_substitutions: None,
            preserve_case: false,
        }
    }

    #[must_use]
    pub fn with_strip_accents(mut self, enable: bool) -> Self {
        self.strip_accents = enable;
        self
    }

    #[must_use]
    pub fn with_lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    #[must_use]
    pub fn with_clean_whitespace(mut self, enable: bool) -> Self {
        self.clean_whitespace = enable;
        self
    }

    #[must_use]
    pub fn with_substitute_chars(mut self, enable: bool) -> Self {
        self.substitute_chars = enable;
        self
    }

    #[must_use]
    pub fn with_custom_substitutions(mut self, table: SubstitutionTable) -> Self {
        self.custom_substitutions = Some(table);
        self
    }

    #[must_use]
    pub fn with_preserve_case(mut self, enable: bool) -> Self {
        self.preserve_case = enable;
        self
    }

    /// Whether the lowercase step runs.
    pub fn lowercases(&self) -> bool {
        self.lowercase && !self.preserve_case
    }

    /// Checks the custom substitution table.
    pub fn validate(&self) -> Result<()> {
        match &self.custom_substitutions {
            Some(table) => table.validate(CUSTOM_SUBSTITUTIONS_KEY),
            None => Ok(()),
        }
    }

    /// Parses options from a JSON object.
    ///
    /// Missing keys keep their defaults. The five flags must be JSON booleans
    /// and `custom_substitutions` must be `null` or an object of strings.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] naming the offending key, or
    /// `options` when the document is not valid JSON or not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use jarko_text::NormalizationOptions;
    ///
    /// let options = NormalizationOptions::from_json_str(
    ///     r#"{"preserve_case": true, "custom_substitutions": {"©": "(c)"}}"#,
    /// ).unwrap();
    /// assert!(options.preserve_case);
    /// assert!(NormalizationOptions::from_json_str(r#"{"lowercase": "yes"}"#).is_err());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TextError::invalid_argument("options", format!("invalid JSON: {e}")))?;
        Self::from_json_value(&value)
    }

    /// Builds options from an already-parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| TextError::invalid_argument("options", "must be a JSON object"))?;

        let mut options = Self::default();
        for (key, value) in object {
            match key.as_str() {
                "strip_accents" => options.strip_accents = json_flag(key, value)?,
                "lowercase" => options.lowercase = json_flag(key, value)?,
                "clean_whitespace" => options.clean_whitespace = json_flag(key, value)?,
                "substitute_chars" => options.substitute_chars = json_flag(key, value)?,
                "preserve_case" => options.preserve_case = json_flag(key, value)?,
                CUSTOM_SUBSTITUTIONS_KEY => {
                    options.custom_substitutions = json_table(key, value)?;
                }
                other => {
                    return Err(TextError::invalid_argument(
                        other,
                        format!(
                            "unknown option; expected one of {}, {CUSTOM_SUBSTITUTIONS_KEY}",
                            FLAG_KEYS.join(", ")
                        ),
                    ));
                }
            }
        }
        options.validate()?;
        Ok(options)
    }
}

fn json_flag(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| TextError::invalid_argument(key, "must be a boolean"))
}

fn json_table(key: &str, value: &Value) -> Result<Option<SubstitutionTable>> {
    let entries: &Map<String, Value> = match value {
        Value::Null => return Ok(None),
        Value::Object(entries) => entries,
        _ => {
            return Err(TextError::invalid_argument(
                key,
                "must be a mapping of text to text",
            ));
        }
    };

    let mut table = SubstitutionTable::new();
    for (from, to) in entries {
        let to = to.as_str().ok_or_else(|| {
            TextError::invalid_argument(
                key,
                format!("replacement for '{from}' must be text"),
            )
        })?;
        table.insert(from.as_str(), to);
    }
    Ok(Some(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = NormalizationOptions::default();
        assert!(options.strip_accents);
        assert!(options.lowercase);
        assert!(options.clean_whitespace);
        assert!(options.substitute_chars);
        assert!(!options.preserve_case);
        assert!(options.custom_substitutions.is_none());
        assert!(options.lowercases());
    }

    #[test]
    fn test_preserve_case_overrides_lowercase() {
        let options = NormalizationOptions::new().with_preserve_case(true);
        assert!(options.lowercase);
        assert!(!options.lowercases());
    }

    #[test]
    fn test_from_json_partial() {
        let options =
            NormalizationOptions::from_json_str(r#"{"strip_accents": false}"#).unwrap();
        assert!(!options.strip_accents);
        assert!(options.lowercase);
    }

    #[test]
    fn test_from_json_custom_table_keeps_order() {
        let options = NormalizationOptions::from_json_str(
            r#"{"custom_substitutions": {"b": "2", "a": "1"}}"#,
        )
        .unwrap();
        let table = options.custom_substitutions.unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("b", "2"), ("a", "1")]);
    }

    #[test]
    fn test_from_json_null_table() {
        let options =
            NormalizationOptions::from_json_str(r#"{"custom_substitutions": null}"#).unwrap();
        assert!(options.custom_substitutions.is_none());
    }

    #[test]
    fn test_from_json_rejects_non_boolean_flag() {
        let err = NormalizationOptions::from_json_str(r#"{"lowercase": "yes"}"#).unwrap_err();
        assert_eq!(
            err,
            TextError::InvalidArgument {
                parameter: "lowercase".to_string(),
                reason: "must be a boolean".to_string(),
            }
        );
    }

    #[test]
    fn test_from_json_rejects_bad_tables() {
        let err = NormalizationOptions::from_json_str(
            r#"{"custom_substitutions": "no es diccionario"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mapping of text to text"));

        let err =
            NormalizationOptions::from_json_str(r#"{"custom_substitutions": {"€": 1}}"#)
                .unwrap_err();
        assert!(err.is_invalid_argument());

        let err =
            NormalizationOptions::from_json_str(r#"{"custom_substitutions": {"": "x"}}"#)
                .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_from_json_rejects_unknown_keys_and_bad_documents() {
        assert!(
            NormalizationOptions::from_json_str(r#"{"uppercase": true}"#)
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            NormalizationOptions::from_json_str("[true]")
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            NormalizationOptions::from_json_str("{not json")
                .unwrap_err()
                .is_invalid_argument()
        );
    }
}
