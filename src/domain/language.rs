/// Target language for the consultation response.
///
/// The set of supported languages is closed. Codes outside it resolve to
/// English as the default rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Self::English,
            "hi" => Self::Hindi,
            "es" => Self::Spanish,
            "fr" => Self::French,
            "de" => Self::German,
            _ => Self::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
        }
    }

    /// Full name as it appears inside the generated prompt.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }
}
