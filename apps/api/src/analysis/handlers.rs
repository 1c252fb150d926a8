//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::warn;

use crate::analysis::{run_analysis, AnalyzeResponse};
use crate::errors::AppError;
use crate::state::AppState;
use crate::uploads::store_upload;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Missing texts are treated as empty rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub jobdesc_text: String,
    pub top_n: Option<i64>,
}

struct UploadedDocument {
    file_name: String,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze/text
///
/// Scores already-extracted resume and job-description text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let response = run_analysis(
        &state,
        &request.resume_text,
        &request.jobdesc_text,
        request.top_n,
    )
    .await?;

    Ok(Json(response))
}

/// POST /api/v1/analyze
///
/// Multipart upload with `resume` and `jobdesc` files plus an optional
/// `top_n` field. Both documents are extracted before any scoring happens.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume = None;
    let mut jobdesc = None;
    let mut top_n = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or(&name).to_string();

        match name.as_str() {
            "resume" | "jobdesc" => {
                let bytes = field.bytes().await.map_err(multipart_error)?;
                let document = UploadedDocument { file_name, bytes };
                if name == "resume" {
                    resume = Some(document);
                } else {
                    jobdesc = Some(document);
                }
            }
            "top_n" => {
                let raw = field.text().await.map_err(multipart_error)?;
                let parsed = raw.trim().parse::<i64>().map_err(|_| {
                    AppError::Validation(format!("top_n must be an integer, got '{raw}'"))
                })?;
                top_n = Some(parsed);
            }
            other => warn!("Ignoring unexpected multipart field '{other}'"),
        }
    }

    let resume =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;
    let jobdesc =
        jobdesc.ok_or_else(|| AppError::Validation("missing 'jobdesc' file field".to_string()))?;

    if let Some(dir) = &state.config.upload_dir {
        for document in [&resume, &jobdesc] {
            if let Err(e) = store_upload(dir, &document.file_name, &document.bytes).await {
                warn!("Upload archive failed for '{}': {e:#}", document.file_name);
            }
        }
    }

    let (resume_text, jobdesc_text) = tokio::try_join!(
        state.extractor.extract(&resume.file_name, &resume.bytes),
        state.extractor.extract(&jobdesc.file_name, &jobdesc.bytes),
    )?;

    let response = run_analysis(&state, &resume_text, &jobdesc_text, top_n).await?;
    Ok(Json(response))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}
