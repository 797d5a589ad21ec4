use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::Language;

/// Canned transcription for running the service without credentials.
pub struct MockTranscriber {
    transcript: String,
}

impl MockTranscriber {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockTranscriber {
    fn default() -> Self {
        Self::new("I have a red rash on my arm")
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _language: Language,
    ) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}
