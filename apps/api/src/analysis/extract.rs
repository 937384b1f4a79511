//! Text Extractor: turns a saved resume into plain text.
//!
//! Dispatch is by extension only. Anything other than `pdf`/`docx` yields an
//! empty string without opening the file.

use std::path::{Path, PathBuf};

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

use crate::models::analysis::file_extension;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Case-insensitive; `None` for anything outside the allowed set.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// Extracts text from `path`, treating it as a document of type `extension`.
pub fn extract_text(path: &Path, extension: &str) -> Result<String, ExtractError> {
    match DocumentKind::from_extension(extension) {
        Some(DocumentKind::Pdf) => extract_pdf_text(path),
        Some(DocumentKind::Docx) => extract_docx_text(path),
        None => Ok(String::new()),
    }
}

/// All text in document order; page boundaries are not preserved.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Paragraph text joined by `\n`, in document order.
pub fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let buffer = std::fs::read(path)?;
    let document = read_docx(&buffer).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = document
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Extracts a saved upload, deriving the type from its own extension.
/// The parsers are blocking, so the work runs off the async executor.
pub async fn extract_resume_text(path: &Path) -> Result<String, ExtractError> {
    let extension = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(file_extension)
        .unwrap_or_default();
    let path: PathBuf = path.to_path_buf();

    run_blocking(move || extract_text(&path, &extension)).await
}

/// Runs a parser on the blocking pool. A panic inside the parser surfaces
/// as `ExtractError::Task` instead of tearing down the request.
async fn run_blocking<F>(parse: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    tokio::task::spawn_blocking(parse).await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::pdf_bytes;
    use docx_rs::{Docx, Paragraph, Run};

    fn squash_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension("doc"), None);
        assert_eq!(DocumentKind::from_extension(""), None);
    }

    #[test]
    fn test_docx_paragraphs_joined_by_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        write_docx(&path, &["Jane Doe", "Experienced in Python"]);

        let text = extract_text(&path, "docx").unwrap();
        assert_eq!(text, "Jane Doe\nExperienced in Python");
    }

    #[test]
    fn test_unsupported_extension_returns_empty_without_reading() {
        // The file does not exist; touching it would be an I/O error.
        let text = extract_text(Path::new("/nonexistent/resume.txt"), "txt").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_docx_path_routes_to_word_extractor_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        write_docx(&path, &["Rust"]);

        // A valid DOCX is not a valid PDF, so success proves the Word path ran.
        assert!(extract_text(&path, "docx").is_ok());
        assert!(matches!(
            extract_text(&path, "pdf"),
            Err(ExtractError::Pdf(_))
        ));
    }

    #[test]
    fn test_pdf_path_routes_to_pdf_extractor_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"not a real pdf").unwrap();

        assert!(matches!(
            extract_text(&path, "pdf"),
            Err(ExtractError::Pdf(_))
        ));
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, pdf_bytes("Experienced in Python")).unwrap();

        let text = extract_text(&path, "pdf").unwrap();
        assert!(
            squash_whitespace(&text).contains("Experienced in Python"),
            "unexpected PDF text: {text:?}"
        );
    }

    #[test]
    fn test_valid_pdf_is_not_read_as_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, pdf_bytes("Rust")).unwrap();

        assert!(matches!(
            extract_text(&path, "docx"),
            Err(ExtractError::Docx(_))
        ));
    }

    #[test]
    fn test_corrupt_docx_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"plain bytes, not a zip").unwrap();

        assert!(matches!(
            extract_text(&path, "docx"),
            Err(ExtractError::Docx(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_resume_text_uses_saved_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Resume.DOCX");
        write_docx(&path, &["Experienced in Python"]);

        let text = extract_resume_text(&path).await.unwrap();
        assert_eq!(text, "Experienced in Python");
    }

    #[tokio::test]
    async fn test_extract_resume_text_reads_pdf_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Resume.PDF");
        std::fs::write(&path, pdf_bytes("Experienced in Python")).unwrap();

        let text = extract_resume_text(&path).await.unwrap();
        assert!(squash_whitespace(&text).contains("Experienced in Python"));
    }

    #[tokio::test]
    async fn test_parser_panic_becomes_task_error() {
        let result = run_blocking(|| panic!("parser blew up")).await;
        assert!(matches!(result, Err(ExtractError::Task(_))));
    }

    #[tokio::test]
    async fn test_extract_resume_text_without_extension_is_empty() {
        let text = extract_resume_text(Path::new("/nonexistent/resume"))
            .await
            .unwrap();
        assert_eq!(text, "");
    }
}
