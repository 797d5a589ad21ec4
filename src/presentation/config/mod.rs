mod settings;

pub use settings::{GroqSettings, ServerSettings, Settings, SettingsError, SynthesisSettings};
