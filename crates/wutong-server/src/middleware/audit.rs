use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Logs every API request as a structured `api_request` event keyed by the
/// route template, with the session id and date pulled out of the path.
/// Record contents are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_string(), |p| p.as_str().to_string());
    let (session, date) = session_and_date(req.uri().path());
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        route = %route,
        session = session.as_deref().unwrap_or("-"),
        date = date.as_deref().unwrap_or("-"),
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}

/// `/sessions/{id}/days/{date}/...` → (id, date), either part optional.
fn session_and_date(path: &str) -> (Option<String>, Option<String>) {
    let mut segments = path.trim_start_matches('/').split('/');
    if segments.next() != Some("sessions") {
        return (None, None);
    }
    let session = segments.next().map(str::to_string);
    let date = match segments.next() {
        Some("days") => segments.next().map(str::to_string),
        _ => None,
    };
    (session, date)
}

