use std::path::Path;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{Transcriber, VisionModel};
use crate::domain::{ConsultationRequest, ImageAttachment, ImageFormat, Language};
use crate::infrastructure::observability::sanitize_patient_text;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ConsultResponse {
    pub transcript: String,
    pub assessment: String,
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn consult_handler<T, V>(
    State(state): State<AppState<T, V>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcriber + 'static,
    V: VisionModel + 'static,
{
    let mut image = None;
    let mut audio = None;
    let mut text = None;
    let mut language = Language::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let Some(format) = ImageFormat::from_mime(&mime) else {
                    tracing::warn!(content_type = %mime, "Unsupported image type");
                    return (
                        StatusCode::UNSUPPORTED_MEDIA_TYPE,
                        Json(ErrorResponse {
                            error: format!("Unsupported image type: {}", mime),
                        }),
                    )
                        .into_response();
                };
                match field.bytes().await {
                    Ok(data) => image = Some(ImageAttachment::new(data.to_vec(), format)),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read image bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read image: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            "audio" => match field.bytes().await {
                Ok(data) => audio = Some(data.to_vec()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read audio bytes");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read audio: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            "text" => match field.text().await {
                Ok(value) => text = Some(value),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read text field");
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read text: {}", e),
                        }),
                    )
                        .into_response();
                }
            },
            "language" => {
                if let Ok(code) = field.text().await {
                    language = Language::from_code(code.trim());
                }
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let request = ConsultationRequest::new(image, audio, text, language);

    match state.consultation_service.consult(request).await {
        Ok(result) => {
            tracing::info!(
                transcript = %sanitize_patient_text(&result.transcript),
                "Consultation request served"
            );
            (
                StatusCode::OK,
                Json(ConsultResponse {
                    transcript: result.transcript,
                    assessment: result.assessment,
                    audio_url: result.audio_path.as_deref().and_then(audio_url_for),
                    error: None,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, stage = e.stage(), "Consultation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ConsultResponse {
                    transcript: e.transcript().unwrap_or_default().to_string(),
                    assessment: e.assessment().unwrap_or_default().to_string(),
                    audio_url: None,
                    error: Some(format!("Consultation failed: {}", e)),
                }),
            )
                .into_response()
        }
    }
}

fn audio_url_for(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| format!("/api/v1/audio/{}", name))
}
