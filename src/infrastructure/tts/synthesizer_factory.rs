use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

use super::elevenlabs_synthesizer::ElevenLabsSynthesizer;
use super::google_translate_synthesizer::GoogleTranslateSynthesizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisProvider {
    GoogleTranslate,
    ElevenLabs,
}

impl TryFrom<&str> for SynthesisProvider {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "gtranslate" | "google" => Ok(Self::GoogleTranslate),
            "elevenlabs" => Ok(Self::ElevenLabs),
            other => Err(format!(
                "Invalid synthesis provider: {}. Expected: gtranslate or elevenlabs",
                other
            )),
        }
    }
}

pub struct SynthesizerFactory;

impl SynthesizerFactory {
    pub fn create(
        provider: SynthesisProvider,
        api_key: Option<String>,
        voice_id: &str,
        model_id: &str,
        output_format: &str,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SynthesisError> {
        match provider {
            SynthesisProvider::GoogleTranslate => Ok(Arc::new(GoogleTranslateSynthesizer::new())),
            SynthesisProvider::ElevenLabs => {
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    SynthesisError::MissingCredential(
                        "API key required for ElevenLabs synthesis".to_string(),
                    )
                })?;
                let engine = ElevenLabsSynthesizer::new(
                    key,
                    None,
                    voice_id.to_string(),
                    model_id.to_string(),
                    output_format.to_string(),
                );
                Ok(Arc::new(engine))
            }
        }
    }
}
