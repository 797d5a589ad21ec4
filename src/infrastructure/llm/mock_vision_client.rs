use async_trait::async_trait;

use crate::application::ports::{VisionModel, VisionModelError};
use crate::domain::EncodedImage;

/// Canned assessment for running the service without credentials.
pub struct MockVisionClient {
    assessment: String,
}

impl MockVisionClient {
    pub fn new(assessment: impl Into<String>) -> Self {
        Self {
            assessment: assessment.into(),
        }
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new(
            "The area shows mild irritation consistent with contact dermatitis, keep it clean and apply a soothing moisturizer.",
        )
    }
}

#[async_trait]
impl VisionModel for MockVisionClient {
    async fn analyze(
        &self,
        _prompt: &str,
        _image: &EncodedImage,
    ) -> Result<String, VisionModelError> {
        Ok(self.assessment.clone())
    }
}
