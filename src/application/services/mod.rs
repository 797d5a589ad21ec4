mod consultation_service;

pub use consultation_service::{
    ConsultationError, ConsultationService, NO_IMAGE_ASSESSMENT, NO_INPUT_MESSAGE,
    NO_INPUT_TRANSCRIPT,
};
