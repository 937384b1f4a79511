//! Response Normalizer: turns raw model text into a `MatchResult`.
//!
//! Never fails: anything that does not parse becomes a fallback result
//! carrying the cleaned text as its recommendation.

use tracing::warn;

use crate::models::analysis::MatchResult;

const FENCE: &str = "```";

/// Trims the text and, only when it opens with a code fence, removes the
/// fence backticks from both ends and the first `json` language tag.
///
/// Backticks inside the payload are left alone.
pub fn clean_response(raw: &str) -> String {
    let text = raw.trim();
    if !text.starts_with(FENCE) {
        return text.to_string();
    }
    text.trim_matches('`').replacen("json", "", 1).trim().to_string()
}

/// Outcome of normalizing one model answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Parsed(MatchResult),
    Fallback(MatchResult),
}

impl Normalized {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Normalized::Fallback(_))
    }

    pub fn into_result(self) -> MatchResult {
        match self {
            Normalized::Parsed(result) | Normalized::Fallback(result) => result,
        }
    }
}

/// Parses `raw`, reporting whether the fallback path was taken.
pub fn parse_response(raw: &str) -> Normalized {
    let cleaned = clean_response(raw);

    if let Some(result) = parse_match(&cleaned).or_else(|| parse_object_span(&cleaned)) {
        return Normalized::Parsed(result);
    }

    warn!("Model response is not a match result; returning raw text");
    Normalized::Fallback(MatchResult::fallback(cleaned))
}

/// Parses `raw` into a `MatchResult`, falling back on any shape mismatch.
#[allow(dead_code)]
pub fn normalize(raw: &str) -> MatchResult {
    parse_response(raw).into_result()
}

fn parse_match(text: &str) -> Option<MatchResult> {
    serde_json::from_str(text).ok()
}

/// Retries on the first `{` .. last `}` span, for answers wrapped in prose.
fn parse_object_span(text: &str) -> Option<MatchResult> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_match(&text[start..=end])
}
