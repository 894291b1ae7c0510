//! Whitespace and punctuation spacing cleanup.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::input::TextInput;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static SPACE_BEFORE_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:!?)\]}])").expect("Invalid closing punctuation regex"));

static SPACE_AFTER_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([(\[{])\s+").expect("Invalid opening punctuation regex"));

static DOUBLE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("Invalid double space regex"));

/// Normalizes whitespace and the spacing around punctuation.
///
/// In order: trims both ends, collapses whitespace runs (tabs, newlines and
/// other Unicode whitespace included) into one space, drops spaces before
/// `, . ; : ! ? ) ] }` and after `( [ {`, then collapses any double spaces
/// left behind.
///
/// # Examples
///
/// ```
/// use jarko_text::clean_whitespace;
///
/// assert_eq!(clean_whitespace("  hola   mundo  ").unwrap(), "hola mundo");
/// assert_eq!(clean_whitespace("hola , mundo ; bien").unwrap(), "hola, mundo; bien");
/// assert_eq!(clean_whitespace("texto ( contenido ) final").unwrap(), "texto (contenido) final");
/// ```
pub fn clean_whitespace(text: impl Into<TextInput>) -> Result<String> {
    let text = text.into().into_text("clean_whitespace")?;
    Ok(clean_whitespace_str(&text))
}

pub(crate) fn clean_whitespace_str(text: &str) -> String {
    let trimmed = text.trim();
    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    let tightened = SPACE_BEFORE_CLOSING.replace_all(&collapsed, "$1");
    let tightened = SPACE_AFTER_OPENING.replace_all(&tightened, "$1");
    DOUBLE_SPACE.replace_all(&tightened, " ").into_owned()
}
