use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckhand_llm::OpenAiProvider;
use deckhand_pipeline::PptxParser;
use deckhand_store::{ArtifactStore, BlobStore};
use deckhand_worker::{WorkerConfig, WorkerLoop};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckhand_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WorkerConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = deckhand_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    deckhand_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database connection pool created");

    let blobs = BlobStore::new(&config.intake_dir, &config.processed_dir);
    blobs
        .ensure_dirs()
        .await
        .expect("Failed to create blob directories");
    let artifacts = ArtifactStore::new(&config.artifacts_dir);
    artifacts
        .ensure_dir()
        .await
        .expect("Failed to create artifact directory");

    let provider = OpenAiProvider::from_env().expect("Explanation provider not configured");

    let worker = WorkerLoop::new(
        pool,
        blobs,
        artifacts,
        Arc::new(PptxParser::new()),
        provider,
        config.poll_interval,
        config.batch_size,
    );

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_cancel.cancel();
        }
    });

    worker.run(cancel).await;
}
