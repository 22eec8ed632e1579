//! Axum route handlers for the Results API.
//!
//! The session lock is released before any generative call and re-taken to
//! apply the reply, so a slow service never blocks reads of the session.
//!
//! The call and the write-back run on a spawned task. A client that hangs
//! up mid-request drops only the handler; the task still clears the
//! `Loading` state or the in-flight marker when the service answers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AppError, RECOMMENDATION_FAILED_MESSAGE};
use crate::questionnaire::handlers::find_session;
use crate::recommendation::board::{LoadStart, ResultsBoard, ResultsState};
use crate::recommendation::export::ExportSettings;
use crate::recommendation::models::RecommendedCareer;
use crate::recommendation::requester::{request_careers, request_detailed_roadmap};
use crate::sessions::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub session_id: Uuid,
    pub status: ResultsStatus,
    pub careers: Vec<RecommendedCareer>,
    pub error: Option<String>,
    pub detail_in_flight: Option<usize>,
    pub export: ExportSettings,
}

impl ResultsView {
    fn new(session_id: Uuid, board: &ResultsBoard) -> Self {
        let (status, error) = match board.state() {
            ResultsState::Idle => (ResultsStatus::Idle, None),
            ResultsState::Loading => (ResultsStatus::Loading, None),
            ResultsState::Ready(_) => (ResultsStatus::Ready, None),
            ResultsState::Failed(reason) => (ResultsStatus::Failed, Some(reason.clone())),
        };
        ResultsView {
            session_id,
            status,
            careers: board.careers().to_vec(),
            error,
            detail_in_flight: board.detail_in_flight(),
            export: ExportSettings::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailedRoadmapResponse {
    pub index: usize,
    /// False when the service call failed; the career keeps its coarse roadmap.
    pub detailed: bool,
    pub career: RecommendedCareer,
}

fn ensure_submitted(session: &Session) -> Result<(), AppError> {
    session
        .questionnaire
        .submitted_answers()
        .map(|_| ())
        .ok_or(AppError::MissingNavigationState)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/results
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsView>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    ensure_submitted(&session)?;
    Ok(Json(ResultsView::new(id, &session.results)))
}

/// POST /api/v1/sessions/:id/results
///
/// Sends the submitted answers to the generative service. Returns the
/// existing results if they are already available.
pub async fn handle_request_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsView>, AppError> {
    let handle = find_session(&state, id).await?;

    let (ticket, answers) = {
        let mut session = handle.lock().await;
        let answers = session
            .questionnaire
            .submitted_answers()
            .cloned()
            .ok_or(AppError::MissingNavigationState)?;
        match session.results.begin_loading()? {
            LoadStart::AlreadyReady => return Ok(Json(ResultsView::new(id, &session.results))),
            LoadStart::Started(ticket) => (ticket, answers),
        }
    };

    let llm = state.llm.clone();
    let task_handle = handle.clone();
    let task = tokio::spawn(async move {
        let outcome = request_careers(&answers, llm.as_ref()).await;

        let mut session = task_handle.lock().await;
        match outcome {
            Ok(careers) => {
                info!("Session {id}: {} careers ready", careers.len());
                session.results.finish_loading(ticket, Ok(careers));
                Ok(ResultsView::new(id, &session.results))
            }
            Err(e) => {
                warn!("Session {id}: recommendation request failed: {e}");
                session
                    .results
                    .finish_loading(ticket, Err(RECOMMENDATION_FAILED_MESSAGE.to_string()));
                Err(e)
            }
        }
    });

    let view = task.await.map_err(|e| AppError::Internal(e.into()))??;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/careers/:index/detailed-roadmap
///
/// Only one detailed roadmap may be generated at a time per session; a
/// second request while one is outstanding gets 409. Service failures are
/// not reported as errors: the career is returned unchanged.
pub async fn handle_detailed_roadmap(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<DetailedRoadmapResponse>, AppError> {
    let handle = find_session(&state, id).await?;

    let ticket = {
        let mut session = handle.lock().await;
        ensure_submitted(&session)?;
        session.results.begin_detail(index)?
    };

    let llm = state.llm.clone();
    let task_handle = handle.clone();
    let task = tokio::spawn(async move {
        let roadmap = match request_detailed_roadmap(&ticket.career, llm.as_ref()).await {
            Ok(roadmap) => Some(roadmap),
            Err(e) => {
                warn!(
                    "Session {id}: detailed roadmap for '{}' failed: {e}",
                    ticket.career.title
                );
                None
            }
        };

        let mut session = task_handle.lock().await;
        let detailed = session.results.finish_detail(&ticket, roadmap);
        let career = session.results.careers().get(index).cloned();
        (detailed, career)
    });

    let (detailed, career) = task.await.map_err(|e| AppError::Internal(e.into()))?;
    let career =
        career.ok_or_else(|| AppError::Conflict("Results were reset during the request".to_string()))?;

    Ok(Json(DetailedRoadmapResponse {
        index,
        detailed,
        career,
    }))
}
