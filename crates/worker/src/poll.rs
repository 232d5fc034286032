//! The polling worker loop.
//!
//! Polls the registry for pending jobs on a fixed interval and runs
//! the slide pipeline on each, one at a time. Exactly one loop
//! instance may run against a given registry: there is no claim
//! locking, so concurrent instances would double-process jobs.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use deckhand_db::models::job::Job;
use deckhand_db::models::status::JobStatus;
use deckhand_db::repositories::JobRepo;
use deckhand_llm::ExplanationProvider;
use deckhand_pipeline::{explain_deck, DeckParser, PipelineError};
use deckhand_store::{ArtifactStore, BlobStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("registry error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// The explanation worker loop.
///
/// Generic over the explanation provider so tests can inject fakes;
/// the parser sits behind its trait object for the same reason.
pub struct WorkerLoop<P: ExplanationProvider> {
    pool: PgPool,
    blobs: BlobStore,
    artifacts: ArtifactStore,
    parser: Arc<dyn DeckParser>,
    provider: P,
    poll_interval: Duration,
    batch_size: usize,
}

impl<P: ExplanationProvider> WorkerLoop<P> {
    pub fn new(
        pool: PgPool,
        blobs: BlobStore,
        artifacts: ArtifactStore,
        parser: Arc<dyn DeckParser>,
        provider: P,
        poll_interval: Duration,
        batch_size: usize,
    ) -> Self {
        Self {
            pool,
            blobs,
            artifacts,
            parser,
            provider,
            poll_interval,
            batch_size,
        }
    }

    /// Run the loop until the cancellation token is triggered.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        tracing::info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Explanation worker started",
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Explanation worker shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cycle().await {
                        tracing::error!(error = %e, "Worker cycle failed");
                    }
                }
            }
        }
    }

    /// One polling cycle: snapshot up to `batch_size` pending jobs
    /// (FIFO) and process them sequentially. Jobs beyond the batch cap
    /// wait for a later cycle.
    ///
    /// Each job is committed to `processing` before any work starts,
    /// so a crash mid-job stalls that one job instead of re-queuing it
    /// (at-most-once processing). A job whose pipeline fails is logged
    /// and left in `processing`; there is no retry and no failed
    /// status.
    pub async fn run_cycle(&self) -> Result<(), WorkerError> {
        let pending =
            JobRepo::list_by_status(&self.pool, JobStatus::Pending, self.batch_size as i64)
                .await?;
        if pending.is_empty() {
            return Ok(());
        }

        tracing::debug!(count = pending.len(), "Pending jobs found");

        for job in pending {
            if !JobRepo::mark_processing(&self.pool, job.id).await? {
                // Someone else moved it since the snapshot; skip.
                continue;
            }

            tracing::info!(job_id = job.id, uid = %job.uid, stored_name = %job.stored_name, "Processing job");

            if let Err(e) = self.process_job(&job).await {
                tracing::error!(
                    job_id = job.id,
                    uid = %job.uid,
                    error = %e,
                    "Job processing failed; job remains in processing",
                );
            }
        }

        Ok(())
    }

    /// Run the pipeline for one job and commit its completion.
    async fn process_job(&self, job: &Job) -> Result<(), WorkerError> {
        let bytes = self.blobs.read_intake(&job.stored_name).await?;

        let explanations = explain_deck(self.parser.as_ref(), &self.provider, &bytes).await?;

        self.artifacts.write(job.uid, &explanations).await?;
        self.blobs.promote(&job.stored_name).await?;
        JobRepo::complete(&self.pool, job.id).await?;

        tracing::info!(
            job_id = job.id,
            uid = %job.uid,
            slides = explanations.len(),
            "Job done",
        );
        Ok(())
    }
}
