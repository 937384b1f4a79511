use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::llm_client::LlmError;
use crate::views::IndexPage;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders the analysis form again with a short message; the
/// underlying cause is logged, never shown.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Upload error: {0}")]
    Upload(#[source] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "The resume could not be read. Please upload a valid PDF or DOCX file."
                        .to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The AI analysis service is unavailable. Please try again later.".to_string(),
                )
            }
            AppError::Upload(e) => {
                tracing::error!("Upload error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The uploaded file could not be stored.".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match IndexPage::failed(message.clone()).render_html() {
            Ok(page) => (status, Html(page)).into_response(),
            // The error page itself failed to render; fall back to plain text.
            Err(_) => (status, message).into_response(),
        }
    }
}
