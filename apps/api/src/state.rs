use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model backend. `GeminiClient` in production, a canned generator in tests.
    pub generator: Arc<dyn TextGenerator>,
}
