use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Transcriber, VisionModel};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{audio_handler, consult_handler, health_handler};
use crate::presentation::state::AppState;

// Image plus audio uploads; the axum default of 2 MB is too small.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<T, V>(state: AppState<T, V>) -> Router
where
    T: Transcriber + 'static,
    V: VisionModel + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/consult", post(consult_handler::<T, V>))
        .route("/api/v1/audio/{filename}", get(audio_handler::<T, V>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
