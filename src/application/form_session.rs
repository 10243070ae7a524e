//! Client-side state of one pitch form.
//!
//! A [`FormSession`] owns the record being edited, the error set of the last
//! submission, and the last submission result. Edits go through the sanitizer
//! and are accepted at any time, including while a submission is pending. Only
//! one submission may be outstanding at once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::services::{PitchService, Submission};
use crate::domain::entities::{ErrorSet, Field, PitchRecord, SubmissionResult};

/// Errors returned by [`FormSession::submit`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Snapshot of a form's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub record: PitchRecord,
    /// Messages from the most recent submission attempt.
    pub errors: ErrorSet,
    pub result: SubmissionResult,
}

/// State and submission control for one pitch form.
pub struct FormSession {
    service: Arc<PitchService>,
    state: Mutex<FormState>,
    in_flight: AtomicBool,
}

impl FormSession {
    pub fn new(service: Arc<PitchService>) -> Self {
        Self {
            service,
            state: Mutex::new(FormState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Applies an input change to `field` and returns the field's value
    /// afterwards.
    ///
    /// Refused input leaves the value unchanged.
    pub fn handle_input(&self, field: Field, raw: &str) -> String {
        self.try_input(field, raw).unwrap_or_else(|| self.value(field))
    }

    /// Applies an input change to `field`, returning `None` if it was refused.
    pub fn try_input(&self, field: Field, raw: &str) -> Option<String> {
        let next = self.service.apply_input(field, raw)?;
        self.state().record.set(field, next.clone());
        Some(next)
    }

    pub fn value(&self, field: Field) -> String {
        self.state().record.get(field).to_string()
    }

    /// Message from the last submission for `field`, if it failed.
    pub fn error(&self, field: Field) -> Option<String> {
        self.state().errors.get(field).map(str::to_string)
    }

    pub fn snapshot(&self) -> FormState {
        self.state().clone()
    }

    /// Returns true while a submission is awaiting validation or creation.
    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits the current record.
    ///
    /// The record is captured when the call starts; edits made while the
    /// submission is pending apply to the form but not to this submission.
    /// On completion the error set and result replace the previous ones.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SubmissionInFlight`] if another submission has
    /// not completed yet.
    pub async fn submit(&self) -> Result<Submission, SessionError> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let (record, previous) = {
            let state = self.state();
            (state.record.clone(), state.result.clone())
        };

        let submission = self.service.submit(record, previous).await;

        let mut state = self.state();
        state.errors = submission.errors.clone();
        state.result = submission.result.clone();

        Ok(submission)
    }

    /// Path of the created pitch after a successful submission.
    pub fn redirect_target(&self) -> Option<String> {
        self.state()
            .result
            .id()
            .map(|id| format!("/startup/{id}"))
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight flag when the submission future completes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SessionError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::SubmissionInFlight)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
