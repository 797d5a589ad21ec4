mod elevenlabs_synthesizer;
mod google_translate_synthesizer;
mod mock_synthesizer;
mod synthesizer_factory;

pub use elevenlabs_synthesizer::ElevenLabsSynthesizer;
pub use google_translate_synthesizer::GoogleTranslateSynthesizer;
pub use mock_synthesizer::MockSynthesizer;
pub use synthesizer_factory::{SynthesisProvider, SynthesizerFactory};
