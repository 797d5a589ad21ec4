use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Hosted synthesis through the ElevenLabs text-to-speech API. Voice,
/// model and audio profile are fixed at construction; only the text
/// varies per request.
pub struct ElevenLabsSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
    output_format: String,
}

impl ElevenLabsSynthesizer {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        voice_id: String,
        model_id: String,
        output_format: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(SYNTHESIS_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            voice_id,
            model_id,
            output_format,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        output_path: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);

        let body = serde_json::json!({
            "text": text,
            "model_id": self.model_id,
        });

        tracing::debug!(voice_id = %self.voice_id, chars = text.len(), "Sending synthesis request to ElevenLabs");

        let response = self
            .client
            .post(&url)
            .query(&[("output_format", self.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
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
            "ElevenLabs synthesis completed"
        );

        Ok(output_path.to_path_buf())
    }
}
