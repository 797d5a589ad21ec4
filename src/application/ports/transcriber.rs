use async_trait::async_trait;

use crate::domain::Language;

/// Speech-to-text capability. The model identifier is fixed by the
/// implementation; only the audio and the language hint vary per request.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        language: Language,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
