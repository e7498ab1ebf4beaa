//! Analyzer flow: résumé upload in, scored Markdown feedback out.
//!
//! The upload lives in a request-scoped scratch file that is deleted before
//! the provider call, on the failure paths included.

use axum::{
    extract::{Multipart, Query, State},
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::llm::ModelTier;
use crate::prompts::render_analyzer_prompt;
use crate::render::markdown_to_html;
use crate::routes::flash_redirect;
use crate::routes::views::{self, FlashQuery};
use crate::state::AppState;
use crate::upload::{allowed_file, ScratchUpload};

/// GET /analyzer
pub async fn analyzer_form(Query(query): Query<FlashQuery>) -> Response {
    views::analyzer_page(&views::flash_banner(&query), None).into_response()
}

/// POST /analyzer
pub async fn submit_analyzer(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("resume_file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?.to_vec();
            file = Some((filename, bytes));
        }
    }

    let Some((filename, bytes)) = file else {
        return Ok(flash_redirect("/analyzer", "danger", "No file part").into_response());
    };
    if filename.is_empty() {
        return Ok(flash_redirect("/analyzer", "danger", "No selected file").into_response());
    }
    if !allowed_file(&filename) {
        return Ok(flash_redirect(
            "/analyzer",
            "danger",
            "Invalid file type. Please upload a PDF or DOCX.",
        )
        .into_response());
    }

    let upload = ScratchUpload::write(&state.upload_dir, &filename, &bytes)?;
    let path = upload.path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_text(&path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?;
    // Scratch file gone before the slow provider call, regardless of outcome.
    drop(upload);

    let resume_text = match extracted {
        Ok(text) => text,
        Err(e) => {
            warn!("extraction failed for {filename}: {e}");
            return Ok(
                flash_redirect("/analyzer", "danger", &format!("Error processing file: {e}"))
                    .into_response(),
            );
        }
    };
    info!(chars = resume_text.len(), "resume text extracted");

    let prompt = render_analyzer_prompt(&resume_text);
    match state.llm.generate(ModelTier::Pro, &prompt).await {
        Ok(markdown) => {
            let results = markdown_to_html(&markdown);
            Ok(views::analyzer_page("", Some(&results)).into_response())
        }
        Err(e) => {
            warn!("analysis generation failed: {e}");
            Ok(
                flash_redirect("/analyzer", "danger", &format!("Error analyzing resume: {e}"))
                    .into_response(),
            )
        }
    }
}
