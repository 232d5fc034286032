//! Handler for the `/upload` resource: accept a presentation, stash
//! the blob in the intake area, and register a pending job.

use std::path::Path;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use deckhand_core::CoreError;
use deckhand_db::models::job::NewJob;
use deckhand_db::repositories::{IdentityRepo, JobRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// The multipart field name carrying the presentation file.
const FILE_FIELD: &str = "file";

/// Query parameters for `POST /upload`.
#[derive(Debug, Deserialize)]
pub struct IntakeQuery {
    /// Owner email. Absent or empty means an anonymous upload.
    pub email: Option<String>,
}

/// Response body for a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub uid: Uuid,
}

/// POST /upload
///
/// Accepts a multipart payload with a `file` part and an optional
/// `email` query parameter. Validates the payload, writes the blob to
/// the intake area under `{uid}{extension}`, resolves ownership, and
/// creates the pending job. Returns the job's uid.
pub async fn upload(
    State(state): State<AppState>,
    Query(params): Query<IntakeQuery>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    // Pull the file part out of the payload.
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let display_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            file = Some((display_name, bytes.to_vec()));
        }
    }

    let (display_name, bytes) = file.ok_or_else(|| {
        CoreError::Validation("No file attached".to_string())
    })?;
    if display_name.is_empty() {
        return Err(CoreError::Validation("Empty filename".to_string()).into());
    }

    let uid = Uuid::new_v4();
    let stored_name = derive_stored_name(uid, &display_name);

    // Ownership is resolved before the blob write so the job insert is
    // the only registry write that can fail once the blob exists.
    let owner_id = match params.email.as_deref() {
        Some(email) if !email.is_empty() => {
            Some(IdentityRepo::find_or_create(&state.pool, email).await?.id)
        }
        _ => None,
    };

    // Blob first, job row second. If the insert fails after this point
    // the blob is orphaned in the intake area; that is a recognized
    // condition and must be visible in the logs.
    state.blobs.write_intake(&stored_name, &bytes).await?;

    let job = JobRepo::create(
        &state.pool,
        &NewJob {
            uid,
            display_name,
            stored_name: stored_name.clone(),
            owner_id,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(
            %uid,
            stored_name = %stored_name,
            error = %e,
            "Registry write failed after blob write; intake blob orphaned",
        );
        e
    })?;

    tracing::info!(
        job_id = job.id,
        uid = %job.uid,
        display_name = %job.display_name,
        owner_id = ?job.owner_id,
        "Upload accepted",
    );

    Ok((StatusCode::OK, Json(UploadResponse { uid })))
}

/// Blob key for an upload: the uid plus the original extension (with
/// its dot), so the parser can dispatch on it downstream. A name with
/// no extension yields the bare uid.
fn derive_stored_name(uid: Uuid, display_name: &str) -> String {
    match Path::new(display_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{uid}.{ext}"),
        None => uid.to_string(),
    }
}
