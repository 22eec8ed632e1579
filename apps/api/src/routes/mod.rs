pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::questionnaire::handlers as questionnaire;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questionnaire API
        .route("/api/v1/questions", get(questionnaire::handle_list_questions))
        .route("/api/v1/sessions", post(questionnaire::handle_create_session))
        .route("/api/v1/sessions/:id", get(questionnaire::handle_get_session))
        .route(
            "/api/v1/sessions/:id/options/:option_id/toggle",
            post(questionnaire::handle_toggle_option),
        )
        .route(
            "/api/v1/sessions/:id/custom-text",
            put(questionnaire::handle_set_custom_text),
        )
        .route(
            "/api/v1/sessions/:id/custom-input/toggle",
            post(questionnaire::handle_toggle_custom_input),
        )
        .route(
            "/api/v1/sessions/:id/advance",
            post(questionnaire::handle_advance),
        )
        .route(
            "/api/v1/sessions/:id/retreat",
            post(questionnaire::handle_retreat),
        )
        .route(
            "/api/v1/sessions/:id/restart",
            post(questionnaire::handle_restart),
        )
        // Results API
        .route(
            "/api/v1/sessions/:id/results",
            get(recommendation::handle_get_results).post(recommendation::handle_request_results),
        )
        .route(
            "/api/v1/sessions/:id/careers/:index/detailed-roadmap",
            post(recommendation::handle_detailed_roadmap),
        )
        .with_state(state)
}
