use medivoice::domain::{CLINICAL_PREAMBLE, DiagnosticPromptBuilder, Language};

#[test]
fn given_query_when_building_then_prompt_starts_with_preamble() {
    let builder = DiagnosticPromptBuilder::default();

    let prompt = builder.build("I have a red rash on my arm", Language::English);

    assert!(prompt.starts_with(CLINICAL_PREAMBLE));
}

#[test]
fn given_query_when_building_then_prompt_contains_query_line() {
    let builder = DiagnosticPromptBuilder::default();

    let prompt = builder.build("I have a red rash on my arm", Language::English);

    assert!(prompt.contains("Patient Query: I have a red rash on my arm"));
}

#[test]
fn given_english_when_building_then_prompt_contains_english_directive() {
    let builder = DiagnosticPromptBuilder::default();

    let prompt = builder.build("persistent cough", Language::English);

    assert!(prompt.contains("You must respond in the English language only."));
}

#[test]
fn given_french_when_building_then_prompt_contains_french_directive() {
    let builder = DiagnosticPromptBuilder::default();

    let prompt = builder.build("persistent cough", Language::French);

    assert!(prompt.contains("You must respond in the French language only."));
    assert!(!prompt.contains("English language only"));
}

#[test]
fn given_same_inputs_when_building_twice_then_prompts_are_identical() {
    let builder = DiagnosticPromptBuilder::default();

    let first = builder.build("itchy eyes", Language::Spanish);
    let second = builder.build("itchy eyes", Language::Spanish);

    assert_eq!(first, second);
}

#[test]
fn given_custom_preamble_when_building_then_replaces_default() {
    let builder = DiagnosticPromptBuilder::new("Answer briefly.");

    let prompt = builder.build("sore throat", Language::German);

    assert!(prompt.starts_with("Answer briefly."));
    assert!(!prompt.contains(CLINICAL_PREAMBLE));
    assert!(prompt.contains("You must respond in the German language only."));
}
