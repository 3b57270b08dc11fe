use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::{Value, json};

use super::error::AppError;
use crate::assembler;
use crate::docx::package;

/// MIME type of the produced file.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /generate request body. Both keys are optional; a missing topic
/// becomes the empty string.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<String>,
    /// Accepted for forward compatibility; never read.
    #[serde(default)]
    pub plan: Option<Value>,
}

/// POST /generate
/// Builds the project document for the given topic and returns it as a
/// downloadable .docx attachment.
pub async fn generate(Json(request): Json<GenerateRequest>) -> Result<impl IntoResponse, AppError> {
    let topic = request.topic.as_deref().unwrap_or("");
    tracing::info!(topic, "generating project document");

    let document = assembler::build(topic, request.plan.as_ref())?;
    let bytes = package::to_bytes(&document)?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"project.docx\"",
            ),
        ],
        bytes,
    ))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "proektgen"
    }))
}
