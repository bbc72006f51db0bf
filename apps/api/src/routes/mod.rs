pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/syllabi/generate",
            post(handlers::handle_generate_syllabus),
        )
        .route(
            "/api/v1/assignments/generate",
            post(handlers::handle_generate_assignment),
        )
        .route("/api/v1/models", get(handlers::handle_list_models))
        .with_state(state)
}
