//! Status resolution: answer "where is job X" from the registry plus,
//! for completed jobs, the artifact store.

use serde::Serialize;
use uuid::Uuid;

use deckhand_core::types::Timestamp;
use deckhand_core::{CoreError, SlideExplanations};
use deckhand_db::models::job::Job;
use deckhand_db::models::status::JobStatus;
use deckhand_db::repositories::JobRepo;
use deckhand_db::DbPool;
use deckhand_store::ArtifactStore;

use crate::error::AppResult;

/// Wire shape of a status response.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// `pending`, `processing`, or `done`.
    pub status: &'static str,
    /// The original upload filename.
    pub filename: String,
    /// When the job was created.
    pub timestamp: Timestamp,
    /// When processing finished; null until the job is done.
    pub finish_time: Option<Timestamp>,
    /// The slide explanation mapping once done; null before that.
    pub explanation: Option<SlideExplanations>,
}

/// Resolve a job by its external uid.
pub async fn by_uid(
    pool: &DbPool,
    artifacts: &ArtifactStore,
    uid: Uuid,
) -> AppResult<StatusReport> {
    let job = JobRepo::find_by_uid(pool, uid)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Job",
            key: uid.to_string(),
        })?;

    report_for(artifacts, job).await
}

/// Resolve the most recently created job for an owner email and
/// display name. Anonymous jobs never match.
pub async fn by_owner_and_name(
    pool: &DbPool,
    artifacts: &ArtifactStore,
    email: &str,
    display_name: &str,
) -> AppResult<StatusReport> {
    let job = JobRepo::find_latest_by_owner_and_name(pool, email, display_name)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Job",
            key: format!("{email}/{display_name}"),
        })?;

    report_for(artifacts, job).await
}

/// Build the report for a resolved job.
///
/// The explanation field is the "none" sentinel (JSON null) while the
/// job is pending or processing, and the full artifact mapping once it
/// is done.
async fn report_for(artifacts: &ArtifactStore, job: Job) -> AppResult<StatusReport> {
    let status = job.status();
    let explanation = match status {
        JobStatus::Pending | JobStatus::Processing => None,
        JobStatus::Done => Some(artifacts.read(job.uid).await?),
    };

    Ok(StatusReport {
        status: status.name(),
        filename: job.display_name,
        timestamp: job.created_at,
        finish_time: job.finish_time,
        explanation,
    })
}
