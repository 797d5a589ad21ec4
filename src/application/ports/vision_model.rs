use async_trait::async_trait;

use crate::domain::EncodedImage;

/// Vision-language inference capability. Takes the fully composed prompt
/// and an encoded image; performs no prompt validation or truncation of
/// its own.
#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn analyze(
        &self,
        prompt: &str,
        image: &EncodedImage,
    ) -> Result<String, VisionModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VisionModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
