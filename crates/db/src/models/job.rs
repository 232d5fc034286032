//! Job entity model and insert DTO.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use deckhand_core::types::{DbId, Timestamp};

use super::status::{JobStatus, StatusId};

/// A row from the `jobs` table: one presentation awaiting, undergoing,
/// or having completed explanation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    /// Externally visible identifier. Unique across all jobs ever
    /// created, never reassigned.
    pub uid: Uuid,
    /// The original upload filename.
    pub display_name: String,
    /// Blob key in the intake/processed areas: `{uid}{extension}`.
    pub stored_name: String,
    pub status_id: StatusId,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    /// Set if and only if the job is done.
    pub finish_time: Option<Timestamp>,
}

impl Job {
    /// Decode the status column.
    ///
    /// The column has a foreign key to the seeded lookup table, so an
    /// unknown ID can only mean schema drift. It is logged and the job
    /// is reported as `pending` rather than panicking a read path.
    pub fn status(&self) -> JobStatus {
        JobStatus::from_id(self.status_id).unwrap_or_else(|| {
            tracing::warn!(
                job_id = self.id,
                status_id = self.status_id,
                "Unknown status id on job row; reporting pending",
            );
            JobStatus::Pending
        })
    }
}

/// DTO for inserting a new job. Status is always `pending` on insert.
#[derive(Debug)]
pub struct NewJob {
    pub uid: Uuid,
    pub display_name: String,
    pub stored_name: String,
    pub owner_id: Option<DbId>,
}
