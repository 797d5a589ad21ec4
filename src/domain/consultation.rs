use std::path::PathBuf;

use uuid::Uuid;

use super::image::ImageAttachment;
use super::language::Language;

/// One patient submission. All fields except the language are optional;
/// the orchestration policy decides what to do with partial input.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationRequest {
    pub image: Option<ImageAttachment>,
    pub audio: Option<Vec<u8>>,
    pub text: Option<String>,
    pub language: Language,
}

impl ConsultationRequest {
    pub fn new(
        image: Option<ImageAttachment>,
        audio: Option<Vec<u8>>,
        text: Option<String>,
        language: Language,
    ) -> Self {
        Self {
            image,
            audio,
            text,
            language,
        }
    }
}

/// The externally observable output of one orchestration cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationResult {
    pub transcript: String,
    pub assessment: String,
    pub audio_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsultationId(Uuid);

impl ConsultationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ConsultationId {
    fn default() -> Self {
        Self::new()
    }
}
