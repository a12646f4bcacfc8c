//! wutong-server library root.
//!
//! The session service: each caregiver session owns one in-memory ledger,
//! reached over a small JSON API. Exposed as a library so integration
//! tests can drive the router without binding a socket.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/policy", get(routes::policy::get_policy))
        .route("/resolve", post(routes::resolve::resolve_day))
        // Sessions
        .route("/sessions", post(routes::sessions::create_session))
        .route("/sessions/{id}", delete(routes::sessions::delete_session))
        .route("/sessions/{id}/reset", post(routes::sessions::reset_session))
        // Days
        .route("/sessions/{id}/days/{date}", get(routes::days::get_day))
        .route(
            "/sessions/{id}/days/{date}/records/{slot}",
            put(routes::days::put_record),
        )
        .route("/sessions/{id}/days/{date}/fill", post(routes::days::fill_scores))
        .route("/sessions/{id}/days/{date}/bases", put(routes::days::put_bases))
        // Export
        .route("/sessions/{id}/export", get(routes::export::export_rows))
        .route(
            "/sessions/{id}/export/markdown",
            get(routes::export::export_markdown),
        )
        .route("/sessions/{id}/export/docx", get(routes::export::export_docx))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
