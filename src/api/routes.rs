use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::types::AppState;
use crate::frontend;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(frontend::create_frontend_router())
        .route("/generate", get(handlers::generate).post(handlers::generate))
        .route("/api/generate", post(handlers::api_generate))
        .route("/api/templates", get(handlers::list_templates))
        .route("/health", get(handlers::health))
        .with_state(state)
}
