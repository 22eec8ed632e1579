use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::questionnaire::models::Question;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one generative-service client, built at startup from the injected key.
    pub llm: Arc<dyn TextGenerator>,
    /// Question catalog, fixed for the life of the process.
    pub questions: Arc<[Question]>,
    pub sessions: SessionStore,
}
