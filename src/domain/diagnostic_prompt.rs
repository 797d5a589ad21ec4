use super::language::Language;

/// Clinical instruction preamble sent ahead of every patient query. The
/// wording is deliberately fixed; only the query and the language
/// directive vary between requests.
pub const CLINICAL_PREAMBLE: &str = "You have to act as a professional doctor.
Analyze the image and the patient's query.
If you make a differential, suggest some remedies.
Do not add any numbers or special characters.
Your response should be in one long paragraph.
Do not say 'In the image I see', just start with your assessment.
Keep your answer concise (max 2 sentences).";

/// Composes the full instruction text for the vision capability.
#[derive(Debug, Clone)]
pub struct DiagnosticPromptBuilder {
    preamble: String,
}

impl DiagnosticPromptBuilder {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    pub fn build(&self, query: &str, language: Language) -> String {
        format!(
            "{}\n\nPatient Query: {}\nIMPORTANT: You must respond in the {} language only.",
            self.preamble,
            query,
            language.full_name()
        )
    }
}

impl Default for DiagnosticPromptBuilder {
    fn default() -> Self {
        Self::new(CLINICAL_PREAMBLE)
    }
}
