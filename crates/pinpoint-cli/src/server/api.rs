//! API endpoint handlers

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use pinpoint_core::{parse_pointers, AnalysisResponse, InputError, QueryResolver};

use super::{AppState, ServerError};
use crate::document::read_pages;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "pinpoint",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fields collected from an `/analyze` upload.
#[derive(Default)]
struct Upload {
    pdf: Option<Bytes>,
    file: Option<Bytes>,
    pointers: Option<String>,
}

impl Upload {
    /// `pdf` takes precedence over `file`; empty uploads count as missing.
    fn document(self) -> Option<Bytes> {
        self.pdf
            .filter(|b| !b.is_empty())
            .or(self.file.filter(|b| !b.is_empty()))
    }
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ServerError> {
    let mut upload = Upload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "pdf" | "file" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
                if name == "pdf" {
                    upload.pdf = Some(data);
                } else {
                    upload.file = Some(data);
                }
            }
            "pointers" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ServerError::InvalidRequest(e.body_text()))?;
                upload.pointers = Some(text);
            }
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    Ok(upload)
}

/// Resolve pointers against an uploaded PDF
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ServerError> {
    let upload = read_upload(&mut multipart).await?;

    let raw_pointers = upload.pointers.clone();
    let document = upload.document().ok_or(InputError::MissingDocument)?;
    let pointers = parse_pointers(raw_pointers.as_deref().ok_or(InputError::InvalidPointers)?)?;

    info!(
        bytes = document.len(),
        pointers = pointers.len(),
        "Analyze request"
    );

    let pages = read_pages(state.reader.clone(), document).await?;

    let resolver = QueryResolver::from_config(state.completion.as_ref(), &state.config);
    let response = resolver.resolve(&pages, &pointers).await;

    Ok(Json(response))
}
