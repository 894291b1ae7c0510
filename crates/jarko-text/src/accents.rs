//! Accent and diacritic removal.

use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::{UnicodeNormalization, is_nfd};
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::error::Result;
use crate::input::TextInput;

/// Characters that carry a diacritic or ligature but have no canonical
/// decomposition, with their plain-letter replacement.
pub const DIACRITIC_EXCEPTIONS: &[(char, &str)] = &[
    ('Ø', "O"),
    ('ø', "o"),
    ('Đ', "D"),
    ('đ', "d"),
    ('Ð', "D"),
    ('ð', "d"),
    ('Ł', "L"),
    ('ł', "l"),
    ('Ŀ', "L"),
    ('ŀ', "l"),
    ('Ħ', "H"),
    ('ħ', "h"),
    ('Ŧ', "T"),
    ('ŧ', "t"),
    ('Ŋ', "N"),
    ('ŋ', "n"),
    ('ı', "i"),
    ('ȷ', "j"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('Æ', "AE"),
    ('æ', "ae"),
    ('Œ', "OE"),
    ('œ', "oe"),
    ('Þ', "TH"),
    ('þ', "th"),
];

static EXCEPTION_LOOKUP: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| DIACRITIC_EXCEPTIONS.iter().copied().collect());

/// Removes accents and other diacritics.
///
/// Non-decomposable letters are mapped through [`DIACRITIC_EXCEPTIONS`], the
/// text is put in NFD, and every nonspacing mark (category `Mn`) is dropped.
/// The result is left decomposed. Non-Latin scripts pass through, minus any
/// nonspacing marks they carry.
///
/// # Errors
///
/// Fails with [`crate::TextError::InvalidInput`] when `text` is null or has no
/// text form.
///
/// # Examples
///
/// ```
/// use jarko_text::strip_accents;
///
/// assert_eq!(strip_accents("José María").unwrap(), "Jose Maria");
/// assert_eq!(strip_accents("Åbo Øresund Zürich").unwrap(), "Abo Oresund Zurich");
/// assert_eq!(strip_accents("Москва").unwrap(), "Москва");
/// ```
pub fn strip_accents(text: impl Into<TextInput>) -> Result<String> {
    let text = text.into().into_text("strip_accents")?;
    Ok(strip_accents_str(&text))
}

pub(crate) fn strip_accents_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Exception letters never decompose, so looking them up in the NFD stream
    // also catches the ones exposed by decomposition (Ǿ -> Ø + acute).
    for ch in text.nfd() {
        if ch.general_category() == GeneralCategory::NonspacingMark {
            continue;
        }
        match EXCEPTION_LOOKUP.get(&ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    // Dropping a starter mark can join two runs of combining characters out
    // of canonical order.
    if is_nfd(&out) {
        out
    } else {
        out.nfd().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_accents() {
        assert_eq!(strip_accents_str("José María"), "Jose Maria");
        assert_eq!(
            strip_accents_str("niño español con corazón"),
            "nino espanol con corazon"
        );
        assert_eq!(strip_accents_str("áéíóú ÁÉÍÓÚ"), "aeiou AEIOU");
    }

    #[test]
    fn test_other_latin_languages() {
        assert_eq!(
            strip_accents_str("ñiño São Paulo Françoise"),
            "nino Sao Paulo Francoise"
        );
        assert_eq!(
            strip_accents_str("Çà et là, naïve café résumé"),
            "Ca et la, naive cafe resume"
        );
    }

    #[test]
    fn test_exception_table() {
        assert_eq!(strip_accents_str("Łódź"), "Lodz");
        assert_eq!(strip_accents_str("Straße"), "Strasse");
        assert_eq!(strip_accents_str("Æsir œuvre"), "AEsir oeuvre");
        assert_eq!(strip_accents_str("Þórr"), "THorr");
        assert_eq!(strip_accents_str("Ǿ"), "O");
    }

    #[test]
    fn test_stacked_combining_marks() {
        assert_eq!(strip_accents_str("e\u{301}\u{302}"), "e");
    }

    #[test]
    fn test_recent_nonspacing_marks() {
        assert_eq!(strip_accents_str("a\u{1DF6}"), "a");
        assert_eq!(strip_accents_str("a\u{1ABF}"), "a");
        assert_eq!(strip_accents_str("e\u{0898}\u{1AC1}\u{1DFA}"), "e");
    }

    #[test]
    fn test_spacing_marks_keep_canonical_order() {
        // U+0902 is a nonspacing starter between two spacing marks.
        let once = strip_accents_str("x\u{1D16D}\u{0902}\u{1D165}");
        assert_eq!(once, "x\u{1D165}\u{1D16D}");
        assert_eq!(strip_accents_str(&once), once);
    }

    #[test]
    fn test_non_latin_scripts_are_kept() {
        assert_eq!(strip_accents_str("Москва 北京 العربية"), "Москва 北京 العربية");
        assert_eq!(
            strip_accents_str("José 123 Москва niña café 北京"),
            "Jose 123 Москва nina cafe 北京"
        );
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(
            strip_accents_str("¿Cómo está usted? ¡Está fantástico!"),
            "¿Como esta usted? ¡Esta fantastico!"
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(strip_accents_str(""), "");
        assert_eq!(strip_accents_str("   "), "   ");
    }

    #[test]
    fn test_long_text() {
        let text = "á".repeat(1000) + &"ñ".repeat(1000) + &"ü".repeat(1000);
        let expected = "a".repeat(1000) + &"n".repeat(1000) + &"u".repeat(1000);
        assert_eq!(strip_accents_str(&text), expected);
    }

    #[test]
    fn test_coerced_inputs() {
        assert_eq!(strip_accents(123).unwrap(), "123");
        assert_eq!(strip_accents(45.67).unwrap(), "45.67");
        assert_eq!(strip_accents(vec!["José", "María"]).unwrap(), "[Jose, Maria]");
        assert!(strip_accents(None::<String>).unwrap_err().is_invalid_input());
    }
}
