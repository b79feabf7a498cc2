//! Axum route handlers for the resume analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::prompts::{ANALYZE_PROMPT, MATCH_PROMPT};
use crate::errors::AppError;
use crate::llm_client;
use crate::pdf::{prepare_resume, JPEG_MIME};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// One submitted interaction: the uploaded resume plus the job text.
/// Nothing here outlives the request.
struct SubmittedForm {
    resume: Option<Bytes>,
    job_description: String,
}

fn bad_form(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid form submission: {e}"))
}

async fn read_form(mut form: Multipart) -> Result<SubmittedForm, AppError> {
    let mut resume = None;
    let mut job_description = String::new();

    while let Some(field) = form.next_field().await.map_err(bad_form)? {
        match field.name() {
            Some("resume") => resume = Some(field.bytes().await.map_err(bad_form)?),
            Some("job_description") => job_description = field.text().await.map_err(bad_form)?,
            _ => continue,
        }
    }

    Ok(SubmittedForm {
        resume,
        job_description,
    })
}

/// Presence check for a button press: both a non-empty resume and non-blank
/// job text must be there, or the canonical missing-input error is returned
/// before any conversion or network call happens.
fn require_inputs(form: SubmittedForm) -> Result<(Bytes, String), AppError> {
    let resume = match form.resume {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(AppError::missing_input()),
    };
    if form.job_description.trim().is_empty() {
        return Err(AppError::missing_input());
    }
    Ok((resume, form.job_description))
}

/// POST /api/v1/resume/preview
///
/// Rasterizes page 1 of the uploaded resume and returns it as a JPEG for
/// the preview region. The page calls this on file selection, before any
/// button press.
pub async fn handle_preview(mut form: Multipart) -> Result<impl IntoResponse, AppError> {
    let mut resume: Option<Bytes> = None;
    while let Some(field) = form.next_field().await.map_err(bad_form)? {
        if field.name() == Some("resume") {
            resume = Some(field.bytes().await.map_err(bad_form)?);
        }
    }

    let snapshot = prepare_resume(&resume.unwrap_or_default())?;
    Ok(([(header::CONTENT_TYPE, JPEG_MIME)], snapshot.jpeg))
}

/// POST /api/v1/resume/analyze
///
/// HR-reviewer feedback for the uploaded resume against the job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    form: Multipart,
) -> Result<Json<FeedbackResponse>, AppError> {
    run_action(state, form, ANALYZE_PROMPT, "analyze").await
}

/// POST /api/v1/resume/match
///
/// ATS percentage match for the uploaded resume against the job description.
pub async fn handle_match(
    State(state): State<AppState>,
    form: Multipart,
) -> Result<Json<FeedbackResponse>, AppError> {
    run_action(state, form, MATCH_PROMPT, "match").await
}

/// Shared flow for both buttons: presence check, first-page conversion,
/// one generate call. The feedback text is the remote response, untouched.
async fn run_action(
    state: AppState,
    form: Multipart,
    instruction: &str,
    action: &str,
) -> Result<Json<FeedbackResponse>, AppError> {
    let (resume, job_description) = require_inputs(read_form(form).await?)?;

    let snapshot = prepare_resume(&resume)?;
    info!(
        "{action}: resume converted ({} bytes JPEG), calling {}",
        snapshot.jpeg.len(),
        llm_client::MODEL
    );

    let feedback = state
        .llm
        .generate(instruction, &snapshot.payload, &job_description)
        .await?;

    Ok(Json(FeedbackResponse { feedback }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(resume: Option<&[u8]>, job_description: &str) -> SubmittedForm {
        SubmittedForm {
            resume: resume.map(Bytes::copy_from_slice),
            job_description: job_description.to_string(),
        }
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let err = require_inputs(form(None, "Senior backend engineer")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = require_inputs(form(Some(b""), "Senior backend engineer")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_job_text_is_rejected() {
        let err = require_inputs(form(Some(b"%PDF-1.4"), "   \n")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_both_inputs_pass_through() {
        let (resume, jd) = require_inputs(form(
            Some(b"%PDF-1.4"),
            "Senior backend engineer, 5 years Go experience",
        ))
        .unwrap();
        assert_eq!(&resume[..], b"%PDF-1.4");
        assert_eq!(jd, "Senior backend engineer, 5 years Go experience");
    }
}
