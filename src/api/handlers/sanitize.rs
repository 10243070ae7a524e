//! Handler for keystroke sanitization.

use axum::{Json, extract::State};

use crate::api::dto::form::{SanitizeRequest, SanitizeResponse};
use crate::state::AppState;

/// Normalizes one input change and reports the value the form should keep.
///
/// # Endpoint
///
/// `POST /api/sanitize`
///
/// # Request Body
///
/// ```json
/// { "field": "title", "previous": "My", "raw": "My  " }
/// ```
///
/// # Response
///
/// ```json
/// { "field": "title", "value": "My ", "accepted": true }
/// ```
///
/// Refused input is not an error: the response carries the previous value
/// with `accepted: false`.
pub async fn sanitize_handler(
    State(state): State<AppState>,
    Json(payload): Json<SanitizeRequest>,
) -> Json<SanitizeResponse> {
    let outcome = state.pitch_service.apply_input(payload.field, &payload.raw);
    let accepted = outcome.is_some();

    Json(SanitizeResponse {
        field: payload.field,
        value: outcome.unwrap_or(payload.previous),
        accepted,
    })
}
