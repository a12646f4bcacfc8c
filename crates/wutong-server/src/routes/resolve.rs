use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use wutong_core::models::record::HourlyRecord;
use wutong_core::models::resolution::Resolution;
use wutong_dosing::Resolver;

use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ResolveRequest {
    pub records: Vec<HourlyRecord>,
    #[serde(default)]
    pub am_base: f64,
    #[serde(default)]
    pub pm_base: f64,
}

/// Stateless resolution of a single day under the configured policy.
/// Per-slot input is read leniently, so only a malformed envelope is
/// rejected.
pub async fn resolve_day(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ResolveRequest>,
) -> Json<Resolution> {
    let resolver = Resolver::new(state.policy);
    Json(resolver.resolve(&req.records, req.am_base, req.pm_base))
}
