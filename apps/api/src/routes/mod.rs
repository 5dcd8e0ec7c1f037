pub mod health;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/parse-resume", post(resume::parse_resume_handler))
        .route("/match-resume", post(resume::match_resume_handler))
        .with_state(state)
}
