//! Axum route handlers for the Screening API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::screening::models::{Document, ScreeningOutcome};
use crate::screening::screener::screen;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUMES_FIELD: &str = "resumes";
const ACCEPTED_CONTENT_TYPES: &[&str] = &["application/pdf", "application/octet-stream"];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Parsed multipart upload: the job description and every resume file, in upload order.
#[derive(Debug)]
pub struct ScreeningUpload {
    pub job_description: String,
    pub documents: Vec<Document>,
}

#[derive(Debug, Serialize)]
pub struct RankedResult {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    /// Two-decimal rendering of `score` for tables.
    pub score_display: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub screening_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub results: Vec<RankedResult>,
    pub warnings: Vec<String>,
}

impl ScreeningResponse {
    fn from_outcome(screening_id: Uuid, outcome: ScreeningOutcome) -> Self {
        let results = outcome
            .ranked
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| RankedResult {
                rank: i + 1,
                score_display: format!("{:.2}", candidate.score),
                name: candidate.name,
                score: candidate.score,
            })
            .collect();

        Self {
            screening_id,
            completed_at: Utc::now(),
            results,
            warnings: outcome.warnings,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screenings
///
/// Multipart form: `job_description` text plus one or more `resumes` PDF files.
/// Returns the resumes ranked by similarity to the job description.
pub async fn handle_create_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let upload = read_upload(&mut multipart, &state.config).await?;

    let screening_id = Uuid::new_v4();
    info!(
        "Screening {screening_id}: {} resumes",
        upload.documents.len()
    );

    let ranker = state.ranker.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        screen(ranker.as_ref(), &upload.job_description, &upload.documents)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Screening task failed: {e}")))?;

    if !outcome.any_text_extracted {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the uploaded resumes.".to_string(),
        ));
    }

    info!("Screening {screening_id} completed");
    Ok(Json(ScreeningResponse::from_outcome(screening_id, outcome)))
}

/// Reads every multipart field, validating as it goes.
///
/// Unknown fields are skipped. Resume files are kept in upload order.
/// A second `job_description` field is rejected rather than overriding the first.
async fn read_upload(
    multipart: &mut Multipart,
    config: &Config,
) -> Result<ScreeningUpload, AppError> {
    let max_resumes = config.max_resumes;
    let to_app_error = |e: MultipartError| multipart_error(e, config.max_upload_bytes);

    let mut job_description: Option<String> = None;
    let mut documents: Vec<Document> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(to_app_error)? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                if job_description.is_some() {
                    return Err(AppError::Validation(
                        "job_description must be sent only once".to_string(),
                    ));
                }
                job_description = Some(field.text().await.map_err(to_app_error)?);
            }
            Some(RESUMES_FIELD) => {
                if documents.len() >= max_resumes {
                    return Err(AppError::Validation(format!(
                        "At most {max_resumes} resumes can be screened at once"
                    )));
                }
                let name = field
                    .file_name()
                    .filter(|n| !n.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("resume-{}.pdf", documents.len() + 1));
                if let Some(content_type) = field.content_type() {
                    if !is_accepted_content_type(content_type) {
                        return Err(AppError::Validation(format!(
                            "{name} must be a PDF, got {content_type}"
                        )));
                    }
                }
                let content = field.bytes().await.map_err(to_app_error)?;
                documents.push(Document { name, content });
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;

    if documents.is_empty() {
        return Err(AppError::Validation(
            "At least one resume must be uploaded".to_string(),
        ));
    }

    Ok(ScreeningUpload {
        job_description,
        documents,
    })
}

/// Compares only the media type essence; parameters such as `name=` are ignored.
fn is_accepted_content_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    ACCEPTED_CONTENT_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}

fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "Upload exceeds the {max_upload_bytes} byte limit"
        ))
    } else {
        AppError::Validation(e.body_text())
    }
}
