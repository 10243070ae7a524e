//! Handlers for pitch submission and lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::form::{PrecheckResponse, SubmitRequest, SubmitResponse};
use crate::api::dto::pitch::PitchResponse;
use crate::domain::entities::PitchRecord;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::id_generator::validate_pitch_id;

/// Validates a pitch record and creates the pitch if it is accepted.
///
/// # Endpoint
///
/// `POST /api/pitches`
///
/// # Request Body
///
/// ```json
/// {
///   "record": {
///     "title": "My App",
///     "description": "A tool that helps people track habits daily",
///     "category": "Tech",
///     "link": "https://example.com/photo.png",
///     "pitch": "This app solves X by doing Y"
///   },
///   "previous": { "status": "INITIAL" }
/// }
/// ```
///
/// # Response
///
/// Always `200 OK`; the outcome is in `result`:
///
/// ```json
/// {
///   "result": { "status": "ERROR", "error": "Validation failed" },
///   "errors": { "link": "URL must point to a valid image" }
/// }
/// ```
///
/// On success `redirect` holds the page of the created pitch.
pub async fn submit_pitch_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    let submission = state
        .pitch_service
        .submit(payload.record, payload.previous)
        .await;

    let redirect = submission.result.id().map(|id| format!("/startup/{id}"));

    Json(SubmitResponse {
        result: submission.result,
        errors: submission.errors,
        redirect,
    })
}

/// Runs the synchronous field rules without probing the image link.
///
/// # Endpoint
///
/// `POST /api/pitches/precheck`
///
/// Useful for showing field messages before the user submits.
pub async fn precheck_pitch_handler(
    State(state): State<AppState>,
    Json(record): Json<PitchRecord>,
) -> Json<PrecheckResponse> {
    Json(PrecheckResponse {
        errors: state.pitch_service.precheck(&record),
    })
}

/// Returns a stored pitch.
///
/// # Endpoint
///
/// `GET /api/pitches/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request for malformed identifiers and 404 Not Found for
/// unknown ones.
pub async fn get_pitch_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PitchResponse>, AppError> {
    validate_pitch_id(&id)?;

    let pitch = state.pitch_service.get_pitch(&id).await?;

    Ok(Json(pitch.into()))
}
