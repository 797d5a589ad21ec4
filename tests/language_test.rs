use medivoice::domain::Language;

#[test]
fn given_supported_codes_when_parsing_then_maps_to_languages() {
    assert_eq!(Language::from_code("en"), Language::English);
    assert_eq!(Language::from_code("hi"), Language::Hindi);
    assert_eq!(Language::from_code("es"), Language::Spanish);
    assert_eq!(Language::from_code("fr"), Language::French);
    assert_eq!(Language::from_code("de"), Language::German);
}

#[test]
fn given_unknown_code_when_parsing_then_defaults_to_english() {
    assert_eq!(Language::from_code("pt"), Language::English);
    assert_eq!(Language::from_code("zz"), Language::English);
    assert_eq!(Language::from_code(""), Language::English);
}

#[test]
fn given_uppercase_code_when_parsing_then_defaults_to_english() {
    assert_eq!(Language::from_code("FR"), Language::English);
}

#[test]
fn given_language_when_asked_for_full_name_then_returns_prompt_wording() {
    assert_eq!(Language::English.full_name(), "English");
    assert_eq!(Language::Hindi.full_name(), "Hindi");
    assert_eq!(Language::Spanish.full_name(), "Spanish");
    assert_eq!(Language::French.full_name(), "French");
    assert_eq!(Language::German.full_name(), "German");
}

#[test]
fn given_language_when_round_tripping_code_then_returns_same_language() {
    for language in [
        Language::English,
        Language::Hindi,
        Language::Spanish,
        Language::French,
        Language::German,
    ] {
        assert_eq!(Language::from_code(language.code()), language);
    }
}

#[test]
fn given_no_selection_when_defaulting_then_uses_english() {
    assert_eq!(Language::default(), Language::English);
}
