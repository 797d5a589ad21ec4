use std::path::PathBuf;

use crate::infrastructure::tts::SynthesisProvider;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";
const DEFAULT_VISION_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
const DEFAULT_VOICE_ID: &str = "9BWtsMINqrJLrRacOk9x";
const DEFAULT_SYNTHESIS_MODEL: &str = "eleven_multilingual_v2";
const DEFAULT_OUTPUT_FORMAT: &str = "mp3_22050_32";

/// Process-wide configuration, resolved once at startup. Credentials are
/// validated here so a misconfigured deployment fails before serving its
/// first request.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub groq: GroqSettings,
    pub synthesis: SynthesisSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub transcription_model: String,
    pub vision_model: String,
}

#[derive(Debug, Clone)]
pub struct SynthesisSettings {
    pub provider: SynthesisProvider,
    pub elevenlabs_api_key: Option<String>,
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                var: "SERVER_PORT",
                reason: format!("not a valid port number: {}", raw),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let groq_api_key = require_env("GROQ_API_KEY")?;

        let provider = match std::env::var("SYNTHESIS_PROVIDER") {
            Ok(raw) => SynthesisProvider::try_from(raw.as_str()).map_err(|reason| {
                SettingsError::InvalidValue {
                    var: "SYNTHESIS_PROVIDER",
                    reason,
                }
            })?,
            Err(_) => SynthesisProvider::ElevenLabs,
        };

        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        if provider == SynthesisProvider::ElevenLabs && elevenlabs_api_key.is_none() {
            return Err(SettingsError::MissingEnvVar("ELEVENLABS_API_KEY"));
        }

        let output_dir = std::env::var("AUDIO_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("medivoice-audio"));

        Ok(Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", DEFAULT_HOST),
                port,
            },
            groq: GroqSettings {
                api_key: groq_api_key,
                base_url: std::env::var("GROQ_BASE_URL").ok(),
                transcription_model: env_or("TRANSCRIPTION_MODEL", DEFAULT_TRANSCRIPTION_MODEL),
                vision_model: env_or("VISION_MODEL", DEFAULT_VISION_MODEL),
            },
            synthesis: SynthesisSettings {
                provider,
                elevenlabs_api_key,
                voice_id: env_or("ELEVENLABS_VOICE_ID", DEFAULT_VOICE_ID),
                model_id: env_or("ELEVENLABS_MODEL_ID", DEFAULT_SYNTHESIS_MODEL),
                output_format: env_or("ELEVENLABS_OUTPUT_FORMAT", DEFAULT_OUTPUT_FORMAT),
                output_dir,
            },
        })
    }
}

fn require_env(var: &'static str) -> Result<String, SettingsError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingEnvVar(var))
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}
