//! Axum HTTP handlers for the mock cloud server

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    logs::generate_mock_logs,
    resources::{is_valid_id, ResourceKind, ResourceStatus},
};
use crate::{errors::AppError, AppState};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: ResourceStatus,
}

pub async fn sdk_source(State(state): State<AppState>) -> Result<Response, AppError> {
    let source = tokio::fs::read_to_string(&*state.sdk_source_path)
        .await
        .map_err(|err| {
            AppError::internal(format!(
                "failed to read sdk source {}: {err}",
                state.sdk_source_path.display()
            ))
        })?;

    Ok(([(header::CONTENT_TYPE, "application/typescript")], source).into_response())
}

pub async fn logs(State(state): State<AppState>) -> Response {
    let body = generate_mock_logs(&mut rand::thread_rng(), state.log_lines);
    ([(header::CONTENT_TYPE, "text/plain")], body).into_response()
}

pub async fn resource_status(
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<StatusResponse>, AppError> {
    let kind = kind.parse::<ResourceKind>().map_err(|_| AppError::NotFound)?;
    if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }

    if !is_valid_id(&id) {
        debug!(kind = %kind, id = %id, "rejecting malformed resource id");
        return Err(AppError::BadRequest);
    }

    Ok(Json(StatusResponse {
        status: ResourceStatus::Ok,
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}
