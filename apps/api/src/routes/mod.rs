pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::flows::handlers as flow_handlers;
use crate::guidance::handlers as guidance_handlers;
use crate::state::AppState;

/// Slack for the JSON envelope and multipart framing around an uploaded file.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Largest JSON body for the flow route: a base64 data URI of a
/// `max_upload_bytes` file plus the surrounding JSON.
pub fn flow_body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.div_ceil(3) * 4 + BODY_OVERHEAD_BYTES
}

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Generation flows
        .route("/api/v1/flows", get(flow_handlers::handle_list_flows))
        .route(
            "/api/v1/flows/:flow",
            post(flow_handlers::handle_generate)
                .layer(DefaultBodyLimit::max(flow_body_limit(max_upload_bytes))),
        )
        .route(
            "/api/v1/resumes/analyze",
            post(flow_handlers::handle_analyze_resume_upload)
                .layer(DefaultBodyLimit::max(max_upload_bytes + BODY_OVERHEAD_BYTES)),
        )
        // Quizzes
        .route(
            "/api/v1/quizzes/:audience",
            get(guidance_handlers::handle_get_quiz),
        )
        .route(
            "/api/v1/quizzes/:audience/assess",
            post(guidance_handlers::handle_assess_quiz),
        )
        // Employer directory
        .route(
            "/api/v1/employers",
            get(guidance_handlers::handle_list_employers),
        )
        .route(
            "/api/v1/employers/:name/jobs",
            get(guidance_handlers::handle_employer_jobs),
        )
        .with_state(state)
}
