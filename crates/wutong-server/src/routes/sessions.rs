use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use uuid::Uuid;

use wutong_ledger::Ledger;

use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::state::{self, AppState};

#[derive(Serialize)]
pub struct SessionCreated {
    id: Uuid,
}

pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let id = Uuid::new_v4();
    state.sessions.lock().await.insert(id, Ledger::new(state.policy));
    tracing::info!(session = %id, "session created");
    (StatusCode::CREATED, Json(SessionCreated { id }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .lock()
        .await
        .remove(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
    tracing::info!(session = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut sessions = state.sessions.lock().await;
    state::ledger_mut(&mut sessions, id)?.reset();
    Ok(StatusCode::NO_CONTENT)
}
