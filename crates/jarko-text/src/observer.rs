//! Diagnostic hook for failed normalization calls.

use crate::error::TextError;

/// Maximum number of characters of the offending text kept in a record.
pub const PREVIEW_CHARS: usize = 50;

/// What an observer receives when a call fails.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureRecord<'a> {
    /// Name of the failing function.
    pub function: &'static str,
    /// The offending text, cut to [`PREVIEW_CHARS`] characters. `None` when
    /// the input itself could not be turned into text.
    pub preview: Option<String>,
    pub error: &'a TextError,
}

impl<'a> FailureRecord<'a> {
    pub fn new(function: &'static str, text: Option<&str>, error: &'a TextError) -> Self {
        Self {
            function,
            preview: text.map(preview),
            error,
        }
    }
}

/// Truncates `text` to [`PREVIEW_CHARS`] characters, appending `...` when cut.
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Receives diagnostic records for failed calls.
///
/// Observers only watch: the error is still returned to the caller.
pub trait FailureObserver: Send + Sync {
    fn on_failure(&self, record: &FailureRecord<'_>);
}

impl<F> FailureObserver for F
where
    F: Fn(&FailureRecord<'_>) + Send + Sync,
{
    fn on_failure(&self, record: &FailureRecord<'_>) {
        self(record);
    }
}

/// Emits each failure as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FailureObserver for TracingObserver {
    fn on_failure(&self, record: &FailureRecord<'_>) {
        tracing::warn!(
            function = record.function,
            preview = record.preview.as_deref().unwrap_or("<none>"),
            error = %record.error,
            "Normalization failed"
        );
    }
}
