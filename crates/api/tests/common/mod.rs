use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use deckhand_api::config::ServerConfig;
use deckhand_api::routes;
use deckhand_api::state::AppState;
use deckhand_db::DbPool;
use deckhand_store::{ArtifactStore, BlobStore};

/// Multipart boundary used by [`upload_request`].
pub const BOUNDARY: &str = "deckhand-test-boundary";

/// Temporary storage directories for one test.
///
/// Dropping this removes the directories, so keep it alive for the
/// duration of the test.
pub struct TestDirs {
    pub root: TempDir,
}

impl TestDirs {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn intake_dir(&self) -> String {
        self.root.path().join("uploads").display().to_string()
    }

    pub fn processed_dir(&self) -> String {
        self.root.path().join("processed").display().to_string()
    }

    pub fn artifacts_dir(&self) -> String {
        self.root.path().join("outputs").display().to_string()
    }

    pub fn blob_store(&self) -> BlobStore {
        BlobStore::new(self.intake_dir(), self.processed_dir())
    }

    pub fn artifact_store(&self) -> ArtifactStore {
        ArtifactStore::new(self.artifacts_dir())
    }
}

/// Build a test `ServerConfig` with safe defaults and the given
/// storage directories.
pub fn test_config(dirs: &TestDirs) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 50 * 1024 * 1024,
        intake_dir: dirs.intake_dir(),
        processed_dir: dirs.processed_dir(),
        artifacts_dir: dirs.artifacts_dir(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and storage directories.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub async fn build_test_app(pool: DbPool, dirs: &TestDirs) -> Router {
    let config = test_config(dirs);

    let blobs = dirs.blob_store();
    blobs.ensure_dirs().await.expect("Failed to create blob dirs");

    let artifacts = dirs.artifact_store();
    artifacts
        .ensure_dir()
        .await
        .expect("Failed to create artifact dir");

    let max_upload_bytes = config.max_upload_bytes;

    let state = AppState {
        pool,
        config: Arc::new(config),
        blobs: Arc::new(blobs),
        artifacts: Arc::new(artifacts),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::api_routes(max_upload_bytes))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Read the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a multipart upload request for `uri` with a single `file`
/// part carrying `filename` and `contents`.
pub fn upload_request(uri: &str, filename: &str, contents: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Build a multipart request for `uri` with no `file` part at all.
pub fn upload_request_without_file(uri: &str) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"notes\"\r\n\r\n");
    body.extend_from_slice(b"just some text");
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
