//! Repository trait for pitch creation and lookup.

use crate::domain::entities::{NewPitch, Pitch, SubmissionResult};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for accepted pitches.
///
/// This is the creation collaborator of the submission flow: it only ever
/// receives records that passed validation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPitchRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PitchRepository: Send + Sync {
    /// Creates a pitch from validated input.
    ///
    /// `previous` is the outcome of the prior submission attempt of the same
    /// form, passed through for implementations that track resubmissions.
    ///
    /// # Returns
    ///
    /// - `SubmissionResult::Success` with the new identifier
    /// - `SubmissionResult::Error` if the implementation declines the pitch
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    async fn create(
        &self,
        new_pitch: NewPitch,
        previous: SubmissionResult,
    ) -> Result<SubmissionResult, AppError>;

    /// Finds a pitch by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    async fn find_by_id(&self, id: &str) -> Result<Option<Pitch>, AppError>;
}
