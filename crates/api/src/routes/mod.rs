pub mod health;
pub mod intake;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET  /health            -> health check
/// POST /upload            -> accept a presentation
/// GET  /status            -> status by owner email + filename
/// GET  /status/{uid}      -> status by uid
/// ```
pub fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(intake::router(max_upload_bytes))
        .merge(status::router())
}
