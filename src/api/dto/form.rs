//! DTOs for the pitch form endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ErrorSet, Field, PitchRecord, SubmissionResult};

/// A single input change to sanitize.
#[derive(Debug, Deserialize)]
pub struct SanitizeRequest {
    pub field: Field,
    /// Value currently held by the form for `field`.
    #[serde(default)]
    pub previous: String,
    /// Raw value after the keystroke.
    pub raw: String,
}

/// The value the form should hold after the input change.
#[derive(Debug, Serialize)]
pub struct SanitizeResponse {
    pub field: Field,
    pub value: String,
    /// False when the input was refused and `value` is the previous value.
    pub accepted: bool,
}

/// Submission of the whole form.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub record: PitchRecord,
    /// Result of the form's previous submission attempt.
    #[serde(default)]
    pub previous: SubmissionResult,
}

/// Result of a submission plus field messages to display.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub result: SubmissionResult,
    pub errors: ErrorSet,
    /// Where the form should navigate after a successful submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Errors from the synchronous rules only.
#[derive(Debug, Serialize)]
pub struct PrecheckResponse {
    pub errors: ErrorSet,
}
