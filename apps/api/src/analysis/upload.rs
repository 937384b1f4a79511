//! Upload gating and persistence.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analysis::extract::DocumentKind;
use crate::models::analysis::{file_extension, UploadedFile};

/// True when `filename` has an extension in the allowed set, any case.
pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename)
        .as_deref()
        .and_then(DocumentKind::from_extension)
        .is_some()
}

/// Reduces a client-supplied name to `[A-Za-z0-9_.-]`, so it can never
/// climb out of the upload folder. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let spaced: String = filename
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let safe: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    safe.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Writes the upload under its sanitized name, replacing any existing file.
/// Returns `Ok(None)` when nothing of the name survives sanitizing.
pub async fn save_upload(
    upload_folder: &Path,
    file: &UploadedFile,
) -> std::io::Result<Option<PathBuf>> {
    let filename = secure_filename(&file.filename);
    if filename.is_empty() {
        return Ok(None);
    }

    let path = upload_folder.join(&filename);
    tokio::fs::write(&path, &file.data).await?;
    debug!(path = %path.display(), bytes = file.data.len(), "Saved upload");
    Ok(Some(path))
}
