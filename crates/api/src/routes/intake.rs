use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::intake;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// Presentations routinely exceed axum's 2 MB default body limit, so
/// the cap is set explicitly from `MAX_UPLOAD_BYTES`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(intake::upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
