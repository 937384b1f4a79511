//! Axum route handlers for the analysis page.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::{debug, info};

use crate::analysis::analyze_resume;
use crate::analysis::upload::{allowed_file, save_upload};
use crate::errors::AppError;
use crate::models::analysis::UploadedFile;
use crate::state::AppState;
use crate::views::IndexPage;

/// Fields of the analysis form.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub job_description: Option<String>,
    pub resume: Option<UploadedFile>,
}

impl AnalysisForm {
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = AnalysisForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
        {
            match field.name().unwrap_or("") {
                "job_description" => {
                    form.job_description = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Unreadable job_description: {e}"))
                    })?);
                }
                "resume" => {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Unreadable resume: {e}")))?;
                    form.resume = Some(UploadedFile { filename, data });
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    Ok(Html(IndexPage::idle().render_html()?))
}

/// POST /
///
/// A missing or disallowed resume is not an error: the empty form comes
/// back unchanged. Otherwise the full pipeline runs inside this request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let form = AnalysisForm::from_multipart(&mut multipart).await?;

    let job_description = form
        .job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;

    let Some(upload) = form.resume.filter(|f| allowed_file(&f.filename)) else {
        debug!("No acceptable resume in submission; re-rendering form");
        return handle_index().await;
    };

    let Some(path) = save_upload(&state.config.upload_folder, &upload)
        .await
        .map_err(AppError::Upload)?
    else {
        debug!(filename = %upload.filename, "Resume name empty after sanitizing");
        return handle_index().await;
    };

    info!(
        filename = %upload.filename,
        extension = ?upload.extension(),
        "Analyzing uploaded resume"
    );
    let result = analyze_resume(&path, &job_description, state.generator.as_ref()).await?;

    Ok(Html(IndexPage::with_result(result).render_html()?))
}
