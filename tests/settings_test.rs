use medivoice::infrastructure::tts::SynthesisProvider;
use medivoice::presentation::{Settings, SettingsError};

const MANAGED_VARS: &[&str] = &[
    "SERVER_HOST",
    "SERVER_PORT",
    "GROQ_API_KEY",
    "GROQ_BASE_URL",
    "TRANSCRIPTION_MODEL",
    "VISION_MODEL",
    "SYNTHESIS_PROVIDER",
    "ELEVENLABS_API_KEY",
    "ELEVENLABS_VOICE_ID",
    "ELEVENLABS_MODEL_ID",
    "ELEVENLABS_OUTPUT_FORMAT",
    "AUDIO_OUTPUT_DIR",
];

// Environment mutation is process-global, so the whole settings lifecycle
// lives in a single test.
#[test]
fn given_environment_when_loading_settings_then_credentials_are_validated_up_front() {
    for var in MANAGED_VARS {
        unsafe { std::env::remove_var(var) };
    }

    let error = Settings::from_env().expect_err("no credentials configured");
    assert!(matches!(error, SettingsError::MissingEnvVar("GROQ_API_KEY")));

    unsafe { std::env::set_var("GROQ_API_KEY", "gsk-test-key") };

    // The default backend is hosted synthesis, which needs its own key.
    let error = Settings::from_env().expect_err("no synthesis credential");
    assert!(matches!(
        error,
        SettingsError::MissingEnvVar("ELEVENLABS_API_KEY")
    ));

    unsafe { std::env::set_var("SYNTHESIS_PROVIDER", "gtranslate") };

    let settings = Settings::from_env().expect("settings load");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.groq.transcription_model, "whisper-large-v3");
    assert_eq!(
        settings.groq.vision_model,
        "meta-llama/llama-4-scout-17b-16e-instruct"
    );
    assert_eq!(settings.synthesis.provider, SynthesisProvider::GoogleTranslate);
    assert_eq!(settings.synthesis.voice_id, "9BWtsMINqrJLrRacOk9x");
    assert_eq!(settings.synthesis.model_id, "eleven_multilingual_v2");
    assert_eq!(settings.synthesis.output_format, "mp3_22050_32");

    unsafe { std::env::set_var("ELEVENLABS_API_KEY", "el-test-key") };
    unsafe { std::env::set_var("SYNTHESIS_PROVIDER", "elevenlabs") };

    let settings = Settings::from_env().expect("settings load");
    assert_eq!(settings.synthesis.provider, SynthesisProvider::ElevenLabs);
    assert_eq!(
        settings.synthesis.elevenlabs_api_key.as_deref(),
        Some("el-test-key")
    );

    unsafe { std::env::set_var("SYNTHESIS_PROVIDER", "polly") };
    let error = Settings::from_env().expect_err("unknown provider");
    assert!(matches!(
        error,
        SettingsError::InvalidValue {
            var: "SYNTHESIS_PROVIDER",
            ..
        }
    ));
    unsafe { std::env::set_var("SYNTHESIS_PROVIDER", "elevenlabs") };

    unsafe { std::env::set_var("SERVER_PORT", "not-a-port") };
    let error = Settings::from_env().expect_err("bad port");
    assert!(matches!(
        error,
        SettingsError::InvalidValue {
            var: "SERVER_PORT",
            ..
        }
    ));

    for var in MANAGED_VARS {
        unsafe { std::env::remove_var(var) };
    }
}
