use axum::Json;
use axum::extract::State;
use jiff::civil::Date;
use serde::Deserialize;
use uuid::Uuid;

use wutong_core::models::record::HourlyRecord;
use wutong_core::models::score::PainScore;
use wutong_ledger::view::DayView;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::{self, AppState};

#[derive(Deserialize)]
pub struct FillRequest {
    pub slots: Vec<usize>,
    pub score: PainScore,
}

/// Manual maintenance bases. `null` or a missing field clears the entry.
#[derive(Deserialize)]
pub struct BasesRequest {
    #[serde(default)]
    pub am: Option<f64>,
    #[serde(default)]
    pub pm: Option<f64>,
}

pub async fn get_day(
    State(state): State<AppState>,
    ApiPath((id, date)): ApiPath<(Uuid, String)>,
) -> Result<Json<DayView>, ApiError> {
    let date: Date = date.parse()?;
    let mut sessions = state.sessions.lock().await;
    let ledger = state::ledger_mut(&mut sessions, id)?;
    Ok(Json(ledger.view(date)?))
}

pub async fn put_record(
    State(state): State<AppState>,
    ApiPath((id, date, slot)): ApiPath<(Uuid, String, usize)>,
    ApiJson(record): ApiJson<HourlyRecord>,
) -> Result<Json<DayView>, ApiError> {
    let date: Date = date.parse()?;
    let mut sessions = state.sessions.lock().await;
    let ledger = state::ledger_mut(&mut sessions, id)?;
    ledger.update_record(date, slot, record)?;
    Ok(Json(ledger.view(date)?))
}

pub async fn fill_scores(
    State(state): State<AppState>,
    ApiPath((id, date)): ApiPath<(Uuid, String)>,
    ApiJson(req): ApiJson<FillRequest>,
) -> Result<Json<DayView>, ApiError> {
    let date: Date = date.parse()?;
    let mut sessions = state.sessions.lock().await;
    let ledger = state::ledger_mut(&mut sessions, id)?;
    ledger.fill_scores(date, &req.slots, req.score)?;
    Ok(Json(ledger.view(date)?))
}

pub async fn put_bases(
    State(state): State<AppState>,
    ApiPath((id, date)): ApiPath<(Uuid, String)>,
    ApiJson(req): ApiJson<BasesRequest>,
) -> Result<Json<DayView>, ApiError> {
    let date: Date = date.parse()?;
    let mut sessions = state.sessions.lock().await;
    let ledger = state::ledger_mut(&mut sessions, id)?;
    ledger.set_manual_bases(date, req.am, req.pm)?;
    Ok(Json(ledger.view(date)?))
}
