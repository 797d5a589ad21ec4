mod speech_synthesizer;
mod transcriber;
mod vision_model;

pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcriber::{Transcriber, TranscriptionError};
pub use vision_model::{VisionModel, VisionModelError};
