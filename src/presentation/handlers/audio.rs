use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{Transcriber, VisionModel};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves a previously synthesized consultation audio file.
#[tracing::instrument(skip(state))]
pub async fn audio_handler<T, V>(
    State(state): State<AppState<T, V>>,
    Path(filename): Path<String>,
) -> impl IntoResponse
where
    T: Transcriber + 'static,
    V: VisionModel + 'static,
{
    // Only filenames the synthesizer produces; anything else could walk
    // out of the audio directory.
    if filename.contains(['/', '\\'])
        || filename.contains("..")
        || !filename.starts_with("consultation-")
        || !filename.ends_with(".mp3")
    {
        tracing::warn!(filename = %filename, "Rejected audio filename");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid audio filename".to_string(),
            }),
        )
            .into_response();
    }

    let path = state.audio_dir.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Audio file not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Audio file not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}
