use medivoice::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, sanitize_patient_text,
};

#[test]
fn given_empty_text_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_patient_text(""), "[EMPTY]");
    assert_eq!(sanitize_patient_text("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(
        sanitize_patient_text("  I have a headache  "),
        "I have a headache"
    );
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_char_count() {
    let text = "a".repeat(200);

    let sanitized = sanitize_patient_text(&text);

    assert!(sanitized.contains("... (200 chars total)"));
    assert!(sanitized.len() < text.len());
}

#[test]
fn given_multibyte_text_when_sanitizing_then_does_not_panic() {
    let text = "é".repeat(120);

    let sanitized = sanitize_patient_text(&text);

    assert!(sanitized.contains("(120 chars total)"));
}

#[test]
fn given_embedded_credential_when_sanitizing_then_redacts_value() {
    let sanitized = sanitize_patient_text("my rash api_key=sk-secret123 still itches");

    assert!(sanitized.contains("api_key=[REDACTED]"));
    assert!(!sanitized.contains("sk-secret123"));
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_expected_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc-123".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}

#[test]
fn given_no_env_vars_when_creating_default_tracing_config_then_is_populated() {
    let config = TracingConfig::default();

    assert!(!config.environment.is_empty());
}
