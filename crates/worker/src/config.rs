use std::time::Duration;

/// Worker configuration loaded from environment variables.
///
/// All fields have defaults matching the service's original layout.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Directory for not-yet-processed uploads (default: `uploads`).
    pub intake_dir: String,
    /// Directory completed source blobs are moved to (default: `processed`).
    pub processed_dir: String,
    /// Directory for explanation artifacts (default: `outputs`).
    pub artifacts_dir: String,
    /// Seconds between polling cycles (default: `10`).
    pub poll_interval: Duration,
    /// Maximum jobs picked up per polling cycle (default: `25`).
    pub batch_size: usize,
}

impl WorkerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `INTAKE_DIR`         | `uploads`   |
    /// | `PROCESSED_DIR`      | `processed` |
    /// | `ARTIFACTS_DIR`      | `outputs`   |
    /// | `POLL_INTERVAL_SECS` | `10`        |
    /// | `BATCH_SIZE`         | `25`        |
    pub fn from_env() -> Self {
        let intake_dir = std::env::var("INTAKE_DIR").unwrap_or_else(|_| "uploads".into());
        let processed_dir = std::env::var("PROCESSED_DIR").unwrap_or_else(|_| "processed".into());
        let artifacts_dir = std::env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "outputs".into());

        let poll_secs: u64 = std::env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("POLL_INTERVAL_SECS must be a valid u64");

        let batch_size: usize = std::env::var("BATCH_SIZE")
            .unwrap_or_else(|_| "25".into())
            .parse()
            .expect("BATCH_SIZE must be a valid usize");

        Self {
            intake_dir,
            processed_dir,
            artifacts_dir,
            poll_interval: Duration::from_secs(poll_secs),
            batch_size,
        }
    }
}
