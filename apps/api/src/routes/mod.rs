pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(templates::index_handler))
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/preview", post(handlers::handle_preview))
        .route("/api/v1/resume/analyze", post(handlers::handle_analyze))
        .route("/api/v1/resume/match", post(handlers::handle_match))
        .with_state(state)
}
