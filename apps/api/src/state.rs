use std::sync::Arc;

use crate::analysis::generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable question generator. Production: `LlmQuestionGenerator`.
    pub generator: Arc<dyn QuestionGenerator>,
}
