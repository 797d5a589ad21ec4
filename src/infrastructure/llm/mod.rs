mod groq_vision_client;
mod mock_vision_client;

pub use groq_vision_client::GroqVisionClient;
pub use mock_vision_client::MockVisionClient;
