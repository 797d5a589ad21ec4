mod audio;
mod consult;
mod health;

pub use audio::audio_handler;
pub use consult::{ConsultResponse, consult_handler};
pub use health::health_handler;
