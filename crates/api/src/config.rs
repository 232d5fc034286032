/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override
/// via environment variables in production.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted upload size in bytes (default: 50 MiB).
    pub max_upload_bytes: usize,
    /// Directory for not-yet-processed uploads (default: `uploads`).
    pub intake_dir: String,
    /// Directory completed source blobs are moved to (default: `processed`).
    pub processed_dir: String,
    /// Directory for explanation artifacts (default: `outputs`).
    pub artifacts_dir: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `MAX_UPLOAD_BYTES`     | `52428800`              |
    /// | `INTAKE_DIR`           | `uploads`               |
    /// | `PROCESSED_DIR`        | `processed`             |
    /// | `ARTIFACTS_DIR`        | `outputs`               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (50 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let intake_dir = std::env::var("INTAKE_DIR").unwrap_or_else(|_| "uploads".into());
        let processed_dir = std::env::var("PROCESSED_DIR").unwrap_or_else(|_| "processed".into());
        let artifacts_dir = std::env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "outputs".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            intake_dir,
            processed_dir,
            artifacts_dir,
        }
    }
}
