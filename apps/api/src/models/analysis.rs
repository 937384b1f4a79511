use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resume file as received from the form, before it touches the disk.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

impl UploadedFile {
    /// Lower-cased text after the last `.`, or `None` when the name has no dot.
    pub fn extension(&self) -> Option<String> {
        file_extension(&self.filename)
    }
}

pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Inputs to a single analysis. Request-scoped, never stored.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Structured output of one resume/job-description comparison.
///
/// `score` is whatever JSON value the model produced: not clamped to 0–100,
/// not coerced from strings or fractions. `None` when absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: Option<Value>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: String,
}

impl MatchResult {
    /// Degraded result carrying the model's unparsed text.
    pub fn fallback(raw_text: impl Into<String>) -> Self {
        Self {
            score: None,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            recommendation: raw_text.into(),
        }
    }

    /// Score as shown to the user; strings are printed without quotes.
    pub fn score_label(&self) -> Option<String> {
        match self.score.as_ref()? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
