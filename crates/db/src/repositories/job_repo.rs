//! Repository for the `jobs` table.
//!
//! Status transitions are guarded UPDATEs: `mark_processing` only
//! fires from `pending` and `complete` only from `processing`, so the
//! pending -> processing -> done order can never regress no matter
//! what callers do.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{Job, NewJob};
use crate::models::status::JobStatus;

/// Column list for `jobs` queries.
const COLUMNS: &str =
    "id, uid, display_name, stored_name, status_id, owner_id, created_at, finish_time";

/// Provides lifecycle operations for jobs.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new pending job.
    ///
    /// A uid collision violates `uq_jobs_uid` and surfaces as a
    /// database error (never a silent overwrite). With 128-bit random
    /// uids this is practically unreachable but still defined.
    pub async fn create(pool: &PgPool, input: &NewJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (uid, display_name, stored_name, status_id, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(input.uid)
            .bind(&input.display_name)
            .bind(&input.stored_name)
            .bind(JobStatus::Pending.id())
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a job by its external uid.
    pub async fn find_by_uid(pool: &PgPool, uid: Uuid) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE uid = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(uid)
            .fetch_optional(pool)
            .await
    }

    /// Find the most recently created job matching an owner email and
    /// display name. Ties on `created_at` break on the higher row id.
    ///
    /// Ownerless (anonymous) jobs never match: the join requires an
    /// identity row.
    pub async fn find_latest_by_owner_and_name(
        pool: &PgPool,
        email: &str,
        display_name: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = "SELECT j.id, j.uid, j.display_name, j.stored_name, j.status_id, \
                    j.owner_id, j.created_at, j.finish_time
             FROM jobs j
             JOIN identities i ON i.id = j.owner_id
             WHERE i.email = $1 AND j.display_name = $2
             ORDER BY j.created_at DESC, j.id DESC
             LIMIT 1";
        sqlx::query_as::<_, Job>(query)
            .bind(email)
            .bind(display_name)
            .fetch_optional(pool)
            .await
    }

    /// List up to `limit` jobs in a given status, oldest first.
    ///
    /// The worker loop relies on this order for FIFO draining and on
    /// the limit to cap one polling cycle's batch.
    pub async fn list_by_status(
        pool: &PgPool,
        status: JobStatus,
        limit: i64,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs WHERE status_id = $1 \
             ORDER BY created_at ASC, id ASC LIMIT $2"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(status.id())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Promote a pending job to `processing`.
    ///
    /// Returns `false` if the job was not in `pending` (already picked
    /// up, already done, or unknown id); the caller must then skip it.
    pub async fn mark_processing(pool: &PgPool, job_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE jobs SET status_id = $2 WHERE id = $1 AND status_id = $3")
            .bind(job_id)
            .bind(JobStatus::Processing.id())
            .bind(JobStatus::Pending.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a processing job as `done`, stamping `finish_time`.
    ///
    /// Status and finish time commit in one statement so the
    /// "finish_time set iff done" invariant holds even across a crash.
    /// Returns `false` if the job was not in `processing`.
    pub async fn complete(pool: &PgPool, job_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE jobs SET status_id = $2, finish_time = NOW() \
             WHERE id = $1 AND status_id = $3",
        )
        .bind(job_id)
        .bind(JobStatus::Done.id())
        .bind(JobStatus::Processing.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
