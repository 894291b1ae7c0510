//! Typographic and special character substitution.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::error::{Result, TextError};
use crate::input::TextInput;

/// Built-in replacements, applied in this order.
///
/// Every key is a single character and no key appears in any replacement, so
/// the order of these entries does not change the result.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    // Quotes and apostrophes
    ("\u{201C}", "\""), // left double quotation mark
    ("\u{201D}", "\""), // right double quotation mark
    ("\u{2018}", "'"),  // left single quotation mark
    ("\u{2019}", "'"),  // right single quotation mark
    ("\u{00AB}", "\""), // «
    ("\u{00BB}", "\""), // »
    ("\u{201A}", ","),  // single low-9 quotation mark
    ("\u{201E}", "\""), // double low-9 quotation mark
    // Dashes
    ("\u{2013}", "-"), // en dash
    ("\u{2014}", "-"), // em dash
    ("\u{2212}", "-"), // minus sign
    ("\u{2012}", "-"), // figure dash
    ("\u{2015}", "-"), // horizontal bar
    // Special spaces
    ("\u{00A0}", " "), // no-break space
    ("\u{200B}", ""),  // zero width space
    ("\u{2009}", " "), // thin space
    ("\u{2008}", " "), // punctuation space
    ("\u{2007}", " "), // figure space
    // Punctuation and marks
    ("\u{2026}", "..."), // ellipsis
    ("\u{2022}", "*"),   // bullet
    ("\u{00B7}", "*"),   // middle dot
    ("\u{2030}", "%"),   // per mille
    ("\u{2122}", "TM"),
    ("\u{00AE}", "R"),
    ("\u{00A9}", "C"),
    // Math
    ("\u{00D7}", "x"),
    ("\u{00F7}", "/"),
    ("\u{00B1}", "+/-"),
    // Currency
    ("\u{20AC}", "EUR"),
    ("\u{00A3}", "GBP"),
    ("\u{00A5}", "YEN"),
    ("\u{00A2}", "cent"),
];

static DEFAULT_TABLE: LazyLock<SubstitutionTable> =
    LazyLock::new(|| DEFAULT_SUBSTITUTIONS.iter().copied().collect());

/// An ordered mapping from literal text to its replacement.
///
/// Insertion order is kept. Inserting a key that is already present replaces
/// its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table.
    pub fn defaults() -> &'static SubstitutionTable {
        &DEFAULT_TABLE
    }

    /// Adds or replaces a mapping.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Checks that every key is non-empty.
    ///
    /// An empty key would match between every pair of characters.
    pub fn validate(&self, parameter: &str) -> Result<()> {
        if self.entries.iter().any(|(key, _)| key.is_empty()) {
            return Err(TextError::invalid_argument(
                parameter,
                "substitution keys must not be empty",
            ));
        }
        Ok(())
    }

    /// The defaults with `custom` layered on top: a custom entry for a default
    /// key takes that key's slot, anything else is appended.
    fn layered_over_defaults(custom: &SubstitutionTable) -> SubstitutionTable {
        let mut table = DEFAULT_TABLE.clone();
        for (key, value) in custom.iter() {
            table.insert(key, value);
        }
        table
    }

    fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (key, value) in self.iter() {
            if out.contains(key) {
                out = out.replace(key, value);
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl From<BTreeMap<String, String>> for SubstitutionTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for SubstitutionTable {
    /// Sorted by key, since `HashMap` has no stable order.
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}

/// Replaces typographic and special characters with plain ASCII equivalents.
///
/// The default table ([`DEFAULT_SUBSTITUTIONS`]) runs first. A `custom_table`
/// entry whose key is a default key redefines that replacement; other custom
/// entries run afterwards, in table order. Because the defaults run first, a
/// multi-character custom key containing a default key character only matches
/// where that character was not already replaced. ASCII control characters
/// other than tab, line feed and carriage return are removed last.
///
/// Zero-width spaces are deleted, so character offsets into the original text
/// do not carry over to the result.
///
/// # Errors
///
/// Fails with [`TextError::InvalidInput`] for null input and with
/// [`TextError::InvalidArgument`] when the custom table has an empty key.
///
/// # Examples
///
/// ```
/// use jarko_text::{SubstitutionTable, substitute_characters};
///
/// assert_eq!(substitute_characters("3×4÷2±1", None).unwrap(), "3x4/2+/-1");
///
/// let custom = SubstitutionTable::new().with("€", "EUROS");
/// assert_eq!(substitute_characters("25€", Some(&custom)).unwrap(), "25EUROS");
/// ```
pub fn substitute_characters(
    text: impl Into<TextInput>,
    custom_table: Option<&SubstitutionTable>,
) -> Result<String> {
    let text = text.into().into_text("substitute_characters")?;
    if let Some(custom) = custom_table {
        custom.validate("custom_table")?;
    }
    Ok(substitute_characters_str(&text, custom_table))
}

/// Substitution for input and table that are already validated.
pub(crate) fn substitute_characters_str(
    text: &str,
    custom_table: Option<&SubstitutionTable>,
) -> String {
    let substituted = match custom_table {
        Some(custom) if !custom.is_empty() => {
            SubstitutionTable::layered_over_defaults(custom).apply(text)
        }
        _ => DEFAULT_TABLE.apply(text),
    };
    strip_control_chars(&substituted)
}

fn is_stripped_control(ch: char) -> bool {
    matches!(
        ch,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{7f}'
    )
}

fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|&ch| !is_stripped_control(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subst(text: &str) -> String {
        substitute_characters_str(text, None)
    }

    #[test]
    fn test_typographic_quotes() {
        assert_eq!(
            subst("Texto con \u{201C}comillas\u{201D} tipográficas"),
            "Texto con \"comillas\" tipográficas"
        );
        assert_eq!(
            subst("It\u{2019}s can\u{2019}t won\u{2018}t"),
            "It's can't won't"
        );
        assert_eq!(
            subst("«Texto» con comillas francesas"),
            "\"Texto\" con comillas francesas"
        );
        assert_eq!(
            subst("Texto\u{201A} con comas\u{201E} especiales"),
            "Texto, con comas\" especiales"
        );
    }

    #[test]
    fn test_dashes_and_ellipsis() {
        assert_eq!(
            subst("Texto \u{2014}con guiones\u{2013} largos"),
            "Texto -con guiones- largos"
        );
        assert_eq!(
            subst("Texto\u{2026} con puntos suspensivos"),
            "Texto... con puntos suspensivos"
        );
        assert_eq!(subst("a\u{2212}b\u{2012}c\u{2015}d"), "a-b-c-d");
    }

    #[test]
    fn test_symbols_and_currency() {
        assert_eq!(subst("Lista • item · otro"), "Lista * item * otro");
        assert_eq!(subst("3×4÷2±1"), "3x4/2+/-1");
        assert_eq!(subst("Precio: 25€, 10£, 100¥"), "Precio: 25EUR, 10GBP, 100YEN");
        assert_eq!(subst("Precio: 50¢"), "Precio: 50cent");
        assert_eq!(
            subst("Producto™ registrado® copyright©"),
            "ProductoTM registradoR copyrightC"
        );
        assert_eq!(subst("Concentración: 5‰"), "Concentración: 5%");
    }

    #[test]
    fn test_special_spaces() {
        assert_eq!(
            subst("texto\u{00A0}con\u{2009}espacios\u{2007}especiales"),
            "texto con espacios especiales"
        );
        assert_eq!(
            subst("texto\u{200B}con\u{200B}espacios\u{200B}invisibles"),
            "textoconespaciosinvisibles"
        );
    }

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(
            subst("texto\x00con\x1Fcaracteres\x7Fcontrol"),
            "textoconcaracterescontrol"
        );
        assert_eq!(subst("tab\there\nnew\rline"), "tab\there\nnew\rline");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Texto normal sin caracteres especiales 123";
        assert_eq!(subst(text), text);
        assert_eq!(subst("José María"), "José María");
        assert_eq!(subst(""), "");
    }

    #[test]
    fn test_custom_entries_are_appended() {
        let custom = SubstitutionTable::new()
            .with("José", "Jose")
            .with("María", "Maria");
        assert_eq!(
            substitute_characters_str("José y María", Some(&custom)),
            "Jose y Maria"
        );
    }

    #[test]
    fn test_custom_entries_override_defaults() {
        let custom = SubstitutionTable::new().with("€", "EUROS");
        assert_eq!(
            substitute_characters_str("Precio: 25€", Some(&custom)),
            "Precio: 25EUROS"
        );
        let custom = SubstitutionTable::new().with("©", "(c)");
        assert_eq!(
            substitute_characters_str("©2024", Some(&custom)),
            "(c)2024"
        );
    }

    #[test]
    fn test_empty_custom_key_is_invalid() {
        let custom = SubstitutionTable::new().with("", "x");
        let err = substitute_characters("texto", Some(&custom)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_table_insert_keeps_position() {
        let mut table = SubstitutionTable::new().with("a", "1").with("b", "2");
        table.insert("a", "3");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
        assert_eq!(table.get("a"), Some("3"));
    }

    #[test]
    fn test_defaults_table_matches_constant() {
        assert_eq!(SubstitutionTable::defaults().len(), DEFAULT_SUBSTITUTIONS.len());
        assert_eq!(SubstitutionTable::defaults().get("€"), Some("EUR"));
    }
}
