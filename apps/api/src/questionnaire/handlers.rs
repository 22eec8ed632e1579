//! Axum route handlers for the Questionnaire API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::questionnaire::engine::{AdvanceOutcome, Phase, Progress, Selection};
use crate::questionnaire::models::Question;
use crate::sessions::{Session, SessionHandle};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CustomTextRequest {
    pub text: String,
}

/// Everything a client needs to draw the question on screen.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub phase: Phase,
    pub question: Question,
    pub progress: Progress,
    pub selection: Selection,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub answered: usize,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let q = &session.questionnaire;
        SessionView {
            session_id: session.id,
            started_at: session.created_at,
            phase: q.phase(),
            question: q.current_question().clone(),
            progress: q.progress(),
            selection: q.selection().clone(),
            can_advance: q.can_advance(),
            can_retreat: q.can_retreat(),
            answered: q.answers().len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// False when the current question had no answer yet.
    pub advanced: bool,
    pub submitted: bool,
    pub session: SessionView,
}

#[derive(Debug, Serialize)]
pub struct RetreatResponse {
    pub moved: bool,
    pub session: SessionView,
}

pub(crate) async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
pub async fn handle_list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.questions.to_vec())
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let handle = state.sessions.create(state.questions.clone()).await?;
    let session = handle.lock().await;
    Ok((StatusCode::CREATED, Json(SessionView::from(&*session))))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/options/:option_id/toggle
pub async fn handle_toggle_option(
    State(state): State<AppState>,
    Path((id, option_id)): Path<(Uuid, String)>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.questionnaire.toggle_option(&option_id)?;
    Ok(Json(SessionView::from(&*session)))
}

/// PUT /api/v1/sessions/:id/custom-text
pub async fn handle_set_custom_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CustomTextRequest>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.questionnaire.set_custom_text(&request.text)?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/custom-input/toggle
pub async fn handle_toggle_custom_input(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.questionnaire.toggle_custom_input()?;
    Ok(Json(SessionView::from(&*session)))
}

/// POST /api/v1/sessions/:id/advance
///
/// A question without any answer is not an error: the response simply
/// reports `advanced: false` and the unchanged view.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;

    let outcome = session.questionnaire.advance()?;
    let (advanced, submitted) = match &outcome {
        AdvanceOutcome::Blocked => (false, false),
        AdvanceOutcome::Moved => (true, false),
        AdvanceOutcome::Submitted(answers) => {
            info!("Session {id} submitted {} answers", answers.len());
            (true, true)
        }
    };

    Ok(Json(AdvanceResponse {
        advanced,
        submitted,
        session: SessionView::from(&*session),
    }))
}

/// POST /api/v1/sessions/:id/retreat
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RetreatResponse>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    let moved = session.questionnaire.retreat()?;
    Ok(Json(RetreatResponse {
        moved,
        session: SessionView::from(&*session),
    }))
}

/// POST /api/v1/sessions/:id/restart
///
/// The "try again" action: clears answers and results.
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    session.restart();
    info!("Session {id} restarted");
    Ok(Json(SessionView::from(&*session)))
}
