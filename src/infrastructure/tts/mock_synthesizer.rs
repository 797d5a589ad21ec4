use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

// Smallest payload players accept as an MPEG audio file: a single empty
// frame header.
const SILENT_MP3: &[u8] = &[0xff, 0xfb, 0x90, 0x00];

/// Writes a placeholder audio file instead of calling a remote backend.
pub struct MockSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        _text: &str,
        output_path: &Path,
    ) -> Result<PathBuf, SynthesisError> {
        tokio::fs::write(output_path, SILENT_MP3)
            .await
            .map_err(|e| {
                SynthesisError::OutputWriteFailed(format!("{}: {}", output_path.display(), e))
            })?;

        Ok(output_path.to_path_buf())
    }
}
