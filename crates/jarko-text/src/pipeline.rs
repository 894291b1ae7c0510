//! The configurable normalization pipeline.
//!
//! Steps always run in the same order, each one gated by its option:
//!
//! 1. character substitution, so the literal characters it targets are seen
//!    before anything else rewrites them
//! 2. accent stripping
//! 3. lowercasing (skipped when `preserve_case` is set; never uppercases)
//! 4. whitespace cleanup, last, to absorb spacing left by earlier steps

use std::fmt;
use std::sync::Arc;

use crate::accents::strip_accents_str;
use crate::error::Result;
use crate::input::TextInput;
use crate::observer::{FailureObserver, FailureRecord};
use crate::options::NormalizationOptions;
use crate::substitution::substitute_characters_str;
use crate::whitespace::clean_whitespace_str;

/// Normalizes text according to `options`.
///
/// Input and options are validated before any step runs.
///
/// # Errors
///
/// [`crate::TextError::InvalidInput`] for null or unconvertible input,
/// [`crate::TextError::InvalidArgument`] for an invalid custom substitution table.
///
/// # Examples
///
/// ```
/// use jarko_text::{NormalizationOptions, normalize};
///
/// let text = "  José María —texto con \"comillas\"  ";
/// assert_eq!(
///     normalize(text, &NormalizationOptions::default()).unwrap(),
///     "jose maria -texto con \"comillas\""
/// );
///
/// let keep_case = NormalizationOptions::default().with_preserve_case(true);
/// assert_eq!(normalize("José MARÍA", &keep_case).unwrap(), "Jose MARIA");
/// ```
pub fn normalize(text: impl Into<TextInput>, options: &NormalizationOptions) -> Result<String> {
    let text = text.into().into_text("normalize")?;
    options.validate()?;
    Ok(normalize_str(&text, options))
}

/// Runs the pipeline on text whose options were already validated.
pub(crate) fn normalize_str(text: &str, options: &NormalizationOptions) -> String {
    let mut result = text.to_string();

    if options.substitute_chars {
        result = substitute_characters_str(&result, options.custom_substitutions.as_ref());
    }
    if options.strip_accents {
        result = strip_accents_str(&result);
    }
    if options.lowercases() {
        result = result.to_lowercase();
    }
    if options.clean_whitespace {
        result = clean_whitespace_str(&result);
    }
    result
}

/// A reusable pipeline with an optional failure observer.
///
/// ```
/// use std::sync::Arc;
/// use jarko_text::{NormalizationOptions, Normalizer, TracingObserver};
///
/// let normalizer = Normalizer::new(NormalizationOptions::default())
///     .with_observer(Arc::new(TracingObserver));
/// assert_eq!(normalizer.normalize("Ñandú  Azul").unwrap(), "nandu azul");
/// assert!(normalizer.normalize(None::<&str>).is_err());
/// ```
#[derive(Clone, Default)]
pub struct Normalizer {
    options: NormalizationOptions,
    observer: Option<Arc<dyn FailureObserver>>,
}

impl Normalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self {
            options,
            observer: None,
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn FailureObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &NormalizationOptions {
        &self.options
    }

    /// Same as [`normalize`], reporting failures to the observer first.
    pub fn normalize(&self, text: impl Into<TextInput>) -> Result<String> {
        let text = match text.into().into_text("normalize") {
            Ok(text) => text,
            Err(error) => {
                self.report(FailureRecord::new("normalize", None, &error));
                return Err(error);
            }
        };
        if let Err(error) = self.options.validate() {
            self.report(FailureRecord::new("normalize", Some(&text), &error));
            return Err(error);
        }
        Ok(normalize_str(&text, &self.options))
    }

    /// Normalizes each item, stopping at the first failure.
    pub fn normalize_all<I, T>(&self, items: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = T>,
        T: Into<TextInput>,
    {
        items.into_iter().map(|item| self.normalize(item)).collect()
    }

    fn report(&self, record: FailureRecord<'_>) {
        if let Some(observer) = &self.observer {
            observer.on_failure(&record);
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("options", &self.options)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
