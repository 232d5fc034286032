use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Liveness probe: reports the crate version and whether the database
/// answers a trivial round trip.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = deckhand_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}
