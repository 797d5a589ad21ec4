use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use medivoice::application::services::ConsultationService;
use medivoice::domain::DiagnosticPromptBuilder;
use medivoice::infrastructure::llm::GroqVisionClient;
use medivoice::infrastructure::observability::{TracingConfig, init_tracing};
use medivoice::infrastructure::speech::GroqWhisperEngine;
use medivoice::infrastructure::tts::SynthesizerFactory;
use medivoice::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let transcriber = Arc::new(GroqWhisperEngine::new(
        settings.groq.api_key.clone(),
        settings.groq.base_url.clone(),
        settings.groq.transcription_model.clone(),
    ));

    let vision_model = Arc::new(GroqVisionClient::new(
        settings.groq.api_key.clone(),
        settings.groq.base_url.clone(),
        settings.groq.vision_model.clone(),
    ));

    let synthesizer = SynthesizerFactory::create(
        settings.synthesis.provider,
        settings.synthesis.elevenlabs_api_key.clone(),
        &settings.synthesis.voice_id,
        &settings.synthesis.model_id,
        &settings.synthesis.output_format,
    )?;

    let consultation_service = Arc::new(ConsultationService::new(
        transcriber,
        vision_model,
        synthesizer,
        DiagnosticPromptBuilder::default(),
        settings.synthesis.output_dir.clone(),
    )?);

    let state = AppState {
        consultation_service,
        audio_dir: settings.synthesis.output_dir.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
