//! courtside-web library - HTTP service for the Courtside application
//!
//! Three independent use cases over one SQLite store:
//! - a post board (submit + list)
//! - historical game score lookup with a fill-once local cache
//! - a best-player vote tally

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::services::schedule::ScheduleClient;

pub mod api;
pub mod services;

/// Application state shared across HTTP handlers.
///
/// Constructed once at process start and handed to the router; there is
/// no ambient global state anywhere in the service.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// External schedule provider client
    pub provider: ScheduleClient,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, provider: ScheduleClient) -> Self {
        Self { db, provider }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/posts", post(api::submit_post).get(api::list_posts))
        .route("/api/scores", get(api::lookup_scores))
        .route("/api/votes", post(api::submit_vote).get(api::list_votes))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
