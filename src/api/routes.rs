//! API route configuration.

use crate::api::handlers::{
    get_pitch_handler, precheck_pitch_handler, sanitize_handler, submit_pitch_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /sanitize`          - Normalize one input change
/// - `POST /pitches`           - Validate and create a pitch
/// - `POST /pitches/precheck`  - Synchronous field checks only
/// - `GET  /pitches/{id}`      - Fetch a stored pitch
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sanitize", post(sanitize_handler))
        .route("/pitches", post(submit_pitch_handler))
        .route("/pitches/precheck", post(precheck_pitch_handler))
        .route("/pitches/{id}", get(get_pitch_handler))
}
