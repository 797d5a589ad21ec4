const MAX_VISIBLE_CHARS: usize = 80;

/// Truncates and redacts patient-supplied text for logging. Symptom
/// descriptions are sensitive, so log lines only ever carry a short
/// preview of what the patient wrote or said.
pub fn sanitize_patient_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let preview = if total_chars > MAX_VISIBLE_CHARS {
        let cut: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", cut, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_credentials(&preview)
}

fn redact_credentials(text: &str) -> String {
    let markers = ["api_key=", "token=", "password=", "secret=", "Bearer "];

    const PLACEHOLDER: &str = "[REDACTED]";

    let mut result = text.to_string();
    for marker in markers {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let value_start = search_from + found + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, PLACEHOLDER);
            search_from = value_start + PLACEHOLDER.len();
        }
    }

    result
}
