use axum::Json;
use axum::extract::State;

use wutong_dosing::PolicyConfig;

use crate::state::AppState;

pub async fn get_policy(State(state): State<AppState>) -> Json<PolicyConfig> {
    Json(state.policy)
}
