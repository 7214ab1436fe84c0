pub mod health;
pub mod metrics;
pub mod resume;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(resume::handle_root))
        .route("/health", get(health::health_handler))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/visit", get(metrics::visit_handler))
        .route("/resume", get(resume::handle_resume))
        .route("/resume.min", get(resume::handle_resume_min))
        .route("/resume.txt", get(resume::handle_resume_txt))
        .with_state(state)
}
