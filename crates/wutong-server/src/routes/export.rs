use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use wutong_core::models::export_row::ExportRow;
use wutong_export::docx::generate_docx;
use wutong_export::render::render_table;

use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::state::{self, AppState};

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

async fn rows_for(state: &AppState, id: Uuid) -> Result<Vec<ExportRow>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    Ok(state::ledger_mut(&mut sessions, id)?.export_rows()?)
}

pub async fn export_rows(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<ExportRow>>, ApiError> {
    Ok(Json(rows_for(&state, id).await?))
}

pub async fn export_markdown(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = rows_for(&state, id).await?;
    let table = render_table(&rows)?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], table))
}

pub async fn export_docx(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = rows_for(&state, id).await?;
    let bytes = generate_docx(&rows, &state.export_styles)?;
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"wutong-export.docx\"",
            ),
        ],
        bytes,
    ))
}
