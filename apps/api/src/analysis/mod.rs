// Resume-to-match-result pipeline:
// upload → extract → prompt → generate → normalize.
// All model calls go through llm_client::TextGenerator.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod upload;

use std::path::Path;

use tracing::{debug, info};

use crate::analysis::extract::extract_resume_text;
use crate::analysis::normalize::parse_response;
use crate::analysis::prompts::build_prompt;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::analysis::{AnalysisRequest, MatchResult};

/// Runs one analysis over an already-saved resume.
///
/// Extraction and model failures are returned as errors; a model answer
/// that does not parse is not an error and comes back as a fallback result.
pub async fn analyze_resume(
    resume_path: &Path,
    job_description: &str,
    generator: &dyn TextGenerator,
) -> Result<MatchResult, AppError> {
    let request = AnalysisRequest {
        resume_text: extract_resume_text(resume_path).await?,
        job_description: job_description.to_string(),
    };
    debug!(
        "Extracted {} chars of resume text from {}",
        request.resume_text.len(),
        resume_path.display()
    );

    let prompt = build_prompt(&request.resume_text, &request.job_description);
    let raw = generator.generate(&prompt).await?;
    debug!(raw_response = %raw, "Model response received");

    let outcome = parse_response(&raw);
    let fallback = outcome.is_fallback();
    let result = outcome.into_result();
    info!(score = ?result.score, fallback, "Resume analysis complete");
    Ok(result)
}


#[cfg(test)]
mod tests {
    use super::test_support::CannedGenerator;
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn test_unsupported_file_still_reaches_model_with_empty_resume() {
        let generator = CannedGenerator::replying("not json at all");
        let result = analyze_resume(Path::new("/nonexistent/resume.txt"), "Rust", &generator)
            .await
            .unwrap();

        assert_eq!(result, MatchResult::fallback("not json at all"));
        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("--- Resume ---\n\n"));
    }

    #[tokio::test]
    async fn test_fenced_answer_is_parsed() {
        let generator = CannedGenerator::replying(
            "```json\n{\"score\": 91, \"matched_skills\": [\"Rust\"], \"missing_skills\": [], \"recommendation\": \"Strong\"}\n```",
        );
        let result = analyze_resume(Path::new("/nonexistent/resume"), "Rust", &generator)
            .await
            .unwrap();
        assert_eq!(result.score, Some(Value::from(91)));
        assert_eq!(result.matched_skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_pdf_resume_text_reaches_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, super::test_support::pdf_bytes("Experienced in Python")).unwrap();

        let generator = CannedGenerator::replying("not json at all");
        analyze_resume(&path, "Need Python", &generator).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        let prompt = prompts[0].split_whitespace().collect::<Vec<_>>().join(" ");
        assert!(prompt.contains("Experienced in Python"));
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let generator = CannedGenerator::failing(500, "boom");
        let err = analyze_resume(Path::new("/nonexistent/resume"), "Rust", &generator)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"not a docx").unwrap();

        let generator = CannedGenerator::replying("{}");
        let err = analyze_resume(&path, "Rust", &generator).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert_eq!(generator.calls(), 0);
    }
}
