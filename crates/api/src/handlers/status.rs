//! Handlers for the `/status` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use deckhand_core::CoreError;

use crate::error::AppResult;
use crate::resolver;
use crate::state::AppState;

/// Query parameters for `GET /status`.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub email: Option<String>,
    pub filename: Option<String>,
}

/// GET /status/{uid}
///
/// Status of the job with the given external identifier, or 404.
pub async fn by_uid(
    State(state): State<AppState>,
    Path(uid): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let report = resolver::by_uid(&state.pool, &state.artifacts, uid).await?;
    Ok(Json(report))
}

/// GET /status?email=&filename=
///
/// Status of the most recently created job matching the owner email
/// and display name, or 404. Anonymous uploads never match.
pub async fn by_owner_and_name(
    State(state): State<AppState>,
    Query(params): Query<StatusQuery>,
) -> AppResult<impl IntoResponse> {
    let email = params
        .email
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("email is required".to_string()))?;
    let filename = params
        .filename
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("filename is required".to_string()))?;

    let report =
        resolver::by_owner_and_name(&state.pool, &state.artifacts, email, filename).await?;
    Ok(Json(report))
}
