pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_analyze),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
