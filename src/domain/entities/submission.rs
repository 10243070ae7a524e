//! Submission outcomes and per-field validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::Field;

/// Message returned when one or more fields fail validation.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Message returned for any failure not attributable to user input.
pub const UNEXPECTED_ERROR: &str = "An unexpected error has occurred";

/// Outcome of one submission attempt.
///
/// Serializes with a `status` discriminator so the form can switch on it:
///
/// ```json
/// { "status": "SUCCESS", "id": "Xk2f9aQpLm0z" }
/// { "status": "ERROR", "error": "Validation failed" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionResult {
    /// No submission has happened yet.
    #[default]
    Initial,
    Success {
        id: String,
    },
    Error {
        error: String,
    },
}

impl SubmissionResult {
    pub fn success(id: impl Into<String>) -> Self {
        Self::Success { id: id.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn validation_failed() -> Self {
        Self::error(VALIDATION_FAILED)
    }

    pub fn unexpected() -> Self {
        Self::error(UNEXPECTED_ERROR)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Identifier of the created pitch, if the submission succeeded.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Success { id } => Some(id),
            _ => None,
        }
    }
}

/// Field-level validation messages for one submission attempt.
///
/// A field absent from the set passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<Field, String>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`. The first message recorded for a field wins.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failed fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
