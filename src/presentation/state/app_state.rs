use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{Transcriber, VisionModel};
use crate::application::services::ConsultationService;

pub struct AppState<T, V>
where
    T: Transcriber,
    V: VisionModel,
{
    pub consultation_service: Arc<ConsultationService<T, V>>,
    pub audio_dir: PathBuf,
}

impl<T, V> Clone for AppState<T, V>
where
    T: Transcriber,
    V: VisionModel,
{
    fn clone(&self) -> Self {
        Self {
            consultation_service: Arc::clone(&self.consultation_service),
            audio_dir: self.audio_dir.clone(),
        }
    }
}
