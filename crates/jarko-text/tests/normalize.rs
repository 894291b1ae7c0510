//! End-to-end behaviour of the public normalization API.

use std::collections::BTreeMap;

use jarko_text::{
    NormalizationOptions, SubstitutionTable, TextError, TextInput, clean_whitespace, normalize,
    strip_accents, substitute_characters, to_lower, to_upper,
};

#[test]
fn strip_accents_spanish_names() {
    assert_eq!(strip_accents("José María").unwrap(), "Jose Maria");
}

#[test]
fn clean_whitespace_trims_and_collapses() {
    assert_eq!(clean_whitespace("  hola   mundo  ").unwrap(), "hola mundo");
}

#[test]
fn clean_whitespace_tightens_punctuation() {
    assert_eq!(
        clean_whitespace("hola , mundo ; bien").unwrap(),
        "hola, mundo; bien"
    );
}

#[test]
fn substitute_characters_math_symbols() {
    assert_eq!(substitute_characters("3×4÷2±1", None).unwrap(), "3x4/2+/-1");
}

#[test]
fn normalize_with_defaults() {
    let text = "  José María —texto con \"comillas\"  ";
    assert_eq!(
        normalize(text, &NormalizationOptions::default()).unwrap(),
        "jose maria -texto con \"comillas\""
    );
}

#[test]
fn normalize_preserve_case_with_accent_stripping() {
    let options = NormalizationOptions::default()
        .with_preserve_case(true)
        .with_strip_accents(true);
    assert_eq!(normalize("José MARÍA", &options).unwrap(), "Jose MARIA");
}

#[test]
fn normalize_without_lowercase() {
    let options = NormalizationOptions::default().with_lowercase(false);
    assert_eq!(normalize("TEXTO", &options).unwrap(), "TEXTO");
}

#[test]
fn normalize_only_case_and_whitespace() {
    let options = NormalizationOptions::default()
        .with_strip_accents(false)
        .with_substitute_chars(false);
    assert_eq!(normalize("  José   MARÍA ", &options).unwrap(), "josé maría");
}

#[test]
fn normalize_typographic_mix() {
    let text = "Texto \u{201C}especial\u{201D} con \u{2014}guiones\u{2014} y • bullets, 25€ ©2024";
    assert_eq!(
        substitute_characters(text, None).unwrap(),
        "Texto \"especial\" con -guiones- y * bullets, 25EUR C2024"
    );
    assert_eq!(
        normalize(text, &NormalizationOptions::default()).unwrap(),
        "texto \"especial\" con -guiones- y * bullets, 25eur c2024"
    );
}

#[test]
fn substitution_does_not_touch_accents() {
    assert_eq!(
        substitute_characters("José María con € y —guiones—", None).unwrap(),
        "José María con EUR y -guiones-"
    );
}

#[test]
fn substitution_custom_table_from_map() {
    let mut map = BTreeMap::new();
    map.insert("José".to_string(), "Jose".to_string());
    map.insert("María".to_string(), "Maria".to_string());
    let table = SubstitutionTable::from(map);
    assert_eq!(
        substitute_characters("José y María", Some(&table)).unwrap(),
        "Jose y Maria"
    );
}

#[test]
fn substitution_long_runs() {
    let text = format!("Texto{}con{}caracteres", "€".repeat(100), "—".repeat(100));
    let result = substitute_characters(text, None).unwrap();
    assert!(result.contains(&"EUR".repeat(100)));
    assert!(result.contains(&"-".repeat(100)));
}

#[test]
fn case_conversion() {
    assert_eq!(to_lower("José MARÍA").unwrap(), "josé maría");
    assert_eq!(to_upper("josé maría").unwrap(), "JOSÉ MARÍA");
}

#[test]
fn null_input_always_fails_with_invalid_input() {
    let results = [
        strip_accents(TextInput::Null),
        to_lower(TextInput::Null),
        to_upper(TextInput::Null),
        clean_whitespace(TextInput::Null),
        substitute_characters(TextInput::Null, None),
        normalize(TextInput::Null, &NormalizationOptions::default()),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert!(
            matches!(err, TextError::InvalidInput { .. }),
            "unexpected error: {err}"
        );
        assert!(err.to_string().contains("must not be null"));
    }
}

#[test]
fn null_input_names_the_function() {
    let err = strip_accents(None::<&str>).unwrap_err();
    assert_eq!(
        err,
        TextError::InvalidInput {
            function: "strip_accents",
            reason: "text must not be null".to_string(),
        }
    );
}

#[test]
fn non_text_inputs_are_coerced() {
    assert_eq!(strip_accents(123).unwrap(), "123");
    assert_eq!(clean_whitespace(45.67).unwrap(), "45.67");
    assert_eq!(substitute_characters(true, None).unwrap(), "true");
    assert_eq!(
        normalize(vec!["José", "€"], &NormalizationOptions::default()).unwrap(),
        "[jose, eur]"
    );
}

#[test]
fn options_from_json_drive_the_pipeline() {
    let options = NormalizationOptions::from_json_str(
        r#"{"lowercase": false, "custom_substitutions": {"©": "(c)"}}"#,
    )
    .unwrap();
    assert_eq!(
        normalize("José María ©2024", &options).unwrap(),
        "Jose Maria (c)2024"
    );
}

#[test]
fn options_from_json_reject_wrong_types() {
    let err = NormalizationOptions::from_json_str(r#"{"preserve_case": 1}"#).unwrap_err();
    assert!(matches!(err, TextError::InvalidArgument { ref parameter, .. } if parameter == "preserve_case"));
}
