pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Upload cap for `/analyze`. Scanned or image-heavy PDF resumes routinely
/// exceed axum's 2 MiB default.
pub const ANALYZE_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(ANALYZE_BODY_LIMIT)),
        )
        .with_state(state)
}
