use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use wutong_dosing::PolicyConfig;
use wutong_export::styles::DocumentStyles;
use wutong_ledger::Ledger;

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Each session id maps to its own ledger; sessions never see each other's
/// days.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Ledger>>>,
    pub policy: PolicyConfig,
    pub export_styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            policy: config.policy,
            export_styles: Arc::new(config.export_styles.clone()),
        }
    }
}

/// Look up a session's ledger.
pub fn ledger_mut(sessions: &mut HashMap<Uuid, Ledger>, id: Uuid) -> Result<&mut Ledger, ApiError> {
    sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
}
