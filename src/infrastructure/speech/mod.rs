mod groq_whisper_engine;
mod mock_transcriber;

pub use groq_whisper_engine::GroqWhisperEngine;
pub use mock_transcriber::MockTranscriber;
