//! HTTP surface for the resolution cascade.
//!
//! - `POST /analyze` - multipart upload (`pdf` or `file`, plus `pointers`)
//! - `GET /health` - liveness probe

mod api;
mod error;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use pinpoint_core::{CompletionService, DocumentReader, PinpointConfig};

pub use api::{handle_analyze, handle_health};
pub use error::ServerError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
    pub reader: Arc<dyn DocumentReader>,
    pub config: Arc<PinpointConfig>,
}

/// Build the application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/health", get(handle_health))
        .route("/analyze", post(handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
