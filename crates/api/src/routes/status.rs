use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Routes mounted at `/status`.
///
/// ```text
/// GET /status           -> by_owner_and_name (query params)
/// GET /status/{uid}     -> by_uid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status::by_owner_and_name))
        .route("/status/{uid}", get(status::by_uid))
}
