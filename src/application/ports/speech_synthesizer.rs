use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Text-to-speech capability. Writes synthesized audio to the given path
/// and returns the path actually written.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        output_path: &Path,
    ) -> Result<PathBuf, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("failed to write audio output: {0}")]
    OutputWriteFailed(String),
    #[error("missing credential: {0}")]
    MissingCredential(String),
}
