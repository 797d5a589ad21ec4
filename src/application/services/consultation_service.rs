use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    SpeechSynthesizer, SynthesisError, Transcriber, TranscriptionError, VisionModel,
    VisionModelError,
};
use crate::domain::{
    ConsultationId, ConsultationRequest, ConsultationResult, DiagnosticPromptBuilder, EncodedImage,
};

/// Transcript returned when neither audio nor text was supplied.
pub const NO_INPUT_TRANSCRIPT: &str = "No input provided";
/// Assessment returned alongside [`NO_INPUT_TRANSCRIPT`].
pub const NO_INPUT_MESSAGE: &str = "Please provide voice or text input.";
/// Assessment returned when no image was supplied for analysis.
pub const NO_IMAGE_ASSESSMENT: &str = "No image provided for me to analyze.";

/// Sequences one consultation: resolve the patient query, run image
/// analysis when an image is present, then voice the assessment.
///
/// The synthesis backend is a trait object because it is chosen from
/// configuration at startup; the transcriber and vision model are fixed
/// at compile time per deployment.
pub struct ConsultationService<T, V>
where
    T: Transcriber,
    V: VisionModel,
{
    transcriber: Arc<T>,
    vision_model: Arc<V>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    prompt_builder: DiagnosticPromptBuilder,
    audio_dir: PathBuf,
}

impl<T, V> ConsultationService<T, V>
where
    T: Transcriber,
    V: VisionModel,
{
    pub fn new(
        transcriber: Arc<T>,
        vision_model: Arc<V>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        prompt_builder: DiagnosticPromptBuilder,
        audio_dir: PathBuf,
    ) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&audio_dir)?;
        Ok(Self {
            transcriber,
            vision_model,
            synthesizer,
            prompt_builder,
            audio_dir,
        })
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            language = request.language.code(),
            has_image = request.image.is_some(),
            has_audio = request.audio.is_some(),
            has_text = request.text.is_some(),
        )
    )]
    pub async fn consult(
        &self,
        request: ConsultationRequest,
    ) -> Result<ConsultationResult, ConsultationError> {
        let transcript = match (&request.audio, &request.text) {
            (Some(audio), _) => {
                tracing::debug!(bytes = audio.len(), "Transcribing patient audio");
                self.transcriber
                    .transcribe(audio, request.language)
                    .await
                    .map_err(ConsultationError::Transcription)?
            }
            (None, Some(text)) if !text.trim().is_empty() => text.clone(),
            _ => {
                tracing::info!("Consultation without audio or text input");
                return Ok(ConsultationResult {
                    transcript: NO_INPUT_TRANSCRIPT.to_string(),
                    assessment: NO_INPUT_MESSAGE.to_string(),
                    audio_path: None,
                });
            }
        };

        let assessment = match &request.image {
            Some(attachment) => {
                let prompt = self.prompt_builder.build(&transcript, request.language);
                let encoded = EncodedImage::encode(attachment);
                self.vision_model
                    .analyze(&prompt, &encoded)
                    .await
                    .map_err(|source| ConsultationError::Vision {
                        transcript: transcript.clone(),
                        source,
                    })?
            }
            None => NO_IMAGE_ASSESSMENT.to_string(),
        };

        // One file per consultation so overlapping requests cannot race
        // on a shared output path.
        let output_path = self
            .audio_dir
            .join(format!("consultation-{}.mp3", ConsultationId::new().as_uuid()));

        let audio_path = self
            .synthesizer
            .synthesize(&assessment, &output_path)
            .await
            .map_err(|source| ConsultationError::Synthesis {
                transcript: transcript.clone(),
                assessment: assessment.clone(),
                source,
            })?;

        tracing::info!(
            transcript_chars = transcript.len(),
            assessment_chars = assessment.len(),
            audio_file = %audio_path.display(),
            "Consultation completed"
        );

        Ok(ConsultationResult {
            transcript,
            assessment,
            audio_path: Some(audio_path),
        })
    }
}

/// Failure of one pipeline stage. Partial results that were already
/// computed before the failure are carried along so callers can surface
/// them instead of discarding the whole request.
#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("image analysis: {source}")]
    Vision {
        transcript: String,
        source: VisionModelError,
    },
    #[error("speech synthesis: {source}")]
    Synthesis {
        transcript: String,
        assessment: String,
        source: SynthesisError,
    },
}

impl ConsultationError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Transcription(_) => "transcription",
            Self::Vision { .. } => "image analysis",
            Self::Synthesis { .. } => "speech synthesis",
        }
    }

    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::Transcription(_) => None,
            Self::Vision { transcript, .. } | Self::Synthesis { transcript, .. } => {
                Some(transcript)
            }
        }
    }

    pub fn assessment(&self) -> Option<&str> {
        match self {
            Self::Synthesis { assessment, .. } => Some(assessment),
            _ => None,
        }
    }
}
