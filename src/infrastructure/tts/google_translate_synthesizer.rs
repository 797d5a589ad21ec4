use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

const ENDPOINT: &str = "https://translate.google.com/translate_tts";
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);
// Language is fixed for this backend; it offers no voice selection.
const SPEECH_LANGUAGE: &str = "en";

/// Free synthesis through the Google Translate speech endpoint. No
/// credential required, making it a drop-in alternative to the hosted
/// backend for local development.
pub struct GoogleTranslateSynthesizer {
    client: Client,
}

impl GoogleTranslateSynthesizer {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(SYNTHESIS_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { client }
    }
}

impl Default for GoogleTranslateSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        output_path: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        tracing::debug!(chars = text.len(), "Sending synthesis request to Google Translate");

        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", SPEECH_LANGUAGE),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}",
                status
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        tokio::fs::write(output_path, &audio)
            .await
            .map_err(|e| {
                SynthesisError::OutputWriteFailed(format!("{}: {}", output_path.display(), e))
            })?;

        tracing::info!(
            bytes = audio.len(),
            audio_file = %output_path.display(),
            "Google Translate synthesis completed"
        );

        Ok(output_path.to_path_buf())
    }
}
