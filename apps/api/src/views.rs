//! Server-rendered pages.

use askama::Template;

use crate::models::analysis::MatchResult;

/// The single analysis page: the upload form, plus either a result or an
/// error message underneath it.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub result: Option<MatchResult>,
    pub error: Option<String>,
}

impl IndexPage {
    /// Empty form, shown on GET and after a rejected upload.
    pub fn idle() -> Self {
        Self {
            result: None,
            error: None,
        }
    }

    pub fn with_result(result: MatchResult) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            result: None,
            error: Some(message),
        }
    }

    pub fn render_html(&self) -> Result<String, askama::Error> {
        self.render()
    }
}
