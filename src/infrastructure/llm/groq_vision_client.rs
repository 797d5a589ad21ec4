use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::application::ports::{VisionModel, VisionModelError};
use crate::domain::EncodedImage;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const INFERENCE_TIMEOUT: Duration = Duration::from_secs(120);
const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Vision-language inference via Groq's OpenAI-compatible chat API. The
/// image travels as a base64 data URI inside an `image_url` content part.
pub struct GroqVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqVisionClient {
    pub fn new(api_key: String, base_url: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(INFERENCE_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionModel for GroqVisionClient {
    async fn analyze(
        &self,
        prompt: &str,
        image: &EncodedImage,
    ) -> Result<String, VisionModelError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": prompt
                        },
                        {
                            "type": "image_url",
                            "image_url": { "url": image.data_uri() }
                        }
                    ]
                }
            ],
            "max_tokens": MAX_COMPLETION_TOKENS,
            "stream": false
        });

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "Sending vision inference request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VisionModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(VisionModelError::QuotaExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(VisionModelError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| VisionModelError::InvalidResponse(format!("parse response: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                VisionModelError::InvalidResponse("completion contained no message".to_string())
            })?;

        tracing::info!(chars = content.len(), "Vision inference completed");

        Ok(content)
    }
}
