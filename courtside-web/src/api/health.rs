//! Service liveness endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Body returned by the liveness probe
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Reports the module name and crate version so monitors can tell what
/// is answering. Touches neither the store nor the provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "courtside-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Routes for the liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
