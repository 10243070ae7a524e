//! Pitch submission service.

use std::sync::Arc;

use crate::domain::entities::{ErrorSet, Field, NewPitch, Pitch, PitchRecord, SubmissionResult};
use crate::domain::repositories::PitchRepository;
use crate::domain::sanitizer;
use crate::domain::validation::PitchSchema;
use crate::error::AppError;
use serde::Serialize;
use serde_json::json;

/// Outcome of [`PitchService::submit`]: the result for the form plus the
/// per-field messages to display.
///
/// `errors` is non-empty only when `result` is a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub result: SubmissionResult,
    pub errors: ErrorSet,
}

/// Service behind the pitch form: sanitizes input, validates records and
/// hands accepted records to the repository.
pub struct PitchService {
    schema: PitchSchema,
    pitch_repository: Arc<dyn PitchRepository>,
}

impl PitchService {
    /// Creates a new pitch service.
    pub fn new(schema: PitchSchema, pitch_repository: Arc<dyn PitchRepository>) -> Self {
        Self {
            schema,
            pitch_repository,
        }
    }

    /// Applies keystroke-level sanitization to one field.
    ///
    /// See [`sanitizer::sanitize`].
    pub fn sanitize(&self, field: Field, previous: &str, raw: &str) -> String {
        sanitizer::sanitize(field, previous, raw)
    }

    /// Like [`Self::sanitize`], but reports a refused update as `None`.
    pub fn apply_input(&self, field: Field, raw: &str) -> Option<String> {
        sanitizer::apply(field, raw)
    }

    /// Runs the synchronous rules only, without probing the image link.
    pub fn precheck(&self, record: &PitchRecord) -> ErrorSet {
        self.schema.validate_sync(record)
    }

    /// Runs every rule, including the image probe, without creating a pitch.
    pub async fn validate(&self, record: &PitchRecord) -> ErrorSet {
        self.schema.validate(record).await
    }

    /// Validates `record` and, if every field passes, creates the pitch.
    ///
    /// This is the only path by which a record reaches the repository.
    ///
    /// # Outcomes
    ///
    /// - All fields valid: the repository result, usually `SUCCESS` with an id
    /// - Some field invalid: `ERROR "Validation failed"` with the error set;
    ///   the repository is not called
    /// - Repository failure: `ERROR "An unexpected error has occurred"` with an
    ///   empty error set
    pub async fn submit(&self, record: PitchRecord, previous: SubmissionResult) -> Submission {
        let errors = self.validate(&record).await;

        if !errors.is_empty() {
            tracing::info!(
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Pitch submission failed validation"
            );
            return Submission {
                result: SubmissionResult::validation_failed(),
                errors,
            };
        }

        let result = match self
            .pitch_repository
            .create(NewPitch::from_record(record), previous)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Pitch creation failed");
                SubmissionResult::unexpected()
            }
        };

        Submission { result, errors }
    }

    /// Retrieves a stored pitch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no pitch has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_pitch(&self, id: &str) -> Result<Pitch, AppError> {
        self.pitch_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pitch not found", json!({ "id": id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{UNEXPECTED_ERROR, VALIDATION_FAILED};
    use crate::domain::probe::{ContentProbe, MockContentProbe};
    use crate::domain::repositories::MockPitchRepository;
    use chrono::Utc;

    fn valid_record() -> PitchRecord {
        PitchRecord {
            title: "My App".to_string(),
            description: "A tool that helps people track habits daily".to_string(),
            category: "Tech".to_string(),
            link: "https://example.com/photo.png".to_string(),
            pitch: "This app solves X by doing Y".to_string(),
        }
    }

    fn image_probe(content_type: &'static str) -> Arc<dyn ContentProbe> {
        let mut probe = MockContentProbe::new();
        probe
            .expect_content_type()
            .returning(move |_| Some(content_type.to_string()));
        Arc::new(probe)
    }

    fn service(probe: Arc<dyn ContentProbe>, repo: MockPitchRepository) -> PitchService {
        PitchService::new(PitchSchema::new(probe), Arc::new(repo))
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo
            .expect_create()
            .withf(|new_pitch, previous| {
                new_pitch.title == "My App"
                    && new_pitch.image == "https://example.com/photo.png"
                    && new_pitch.pitch == "This app solves X by doing Y"
                    && *previous == SubmissionResult::Initial
            })
            .times(1)
            .returning(|_, _| Ok(SubmissionResult::success("abc123")));

        let service = service(image_probe("image/png"), mock_repo);
        let submission = service
            .submit(valid_record(), SubmissionResult::Initial)
            .await;

        assert!(submission.errors.is_empty());
        assert_eq!(submission.result, SubmissionResult::success("abc123"));
    }

    #[tokio::test]
    async fn test_submit_validation_failure_skips_repository() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo.expect_create().times(0);

        let mut record = valid_record();
        record.description = "Too short".to_string();

        let service = service(image_probe("image/png"), mock_repo);
        let submission = service.submit(record, SubmissionResult::Initial).await;

        assert_eq!(submission.result, SubmissionResult::error(VALIDATION_FAILED));
        assert_eq!(submission.errors.len(), 1);
        assert!(submission.errors.contains(Field::Description));
    }

    #[tokio::test]
    async fn test_submit_non_image_link() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo.expect_create().times(0);

        let service = service(image_probe("text/html"), mock_repo);
        let submission = service
            .submit(valid_record(), SubmissionResult::Initial)
            .await;

        assert_eq!(submission.result, SubmissionResult::validation_failed());
        assert_eq!(
            submission.errors.get(Field::Link),
            Some("URL must point to a valid image")
        );
    }

    #[tokio::test]
    async fn test_submit_repository_failure() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_, _| Err(AppError::internal("storage down", json!({}))));

        let service = service(image_probe("image/png"), mock_repo);
        let submission = service
            .submit(valid_record(), SubmissionResult::Initial)
            .await;

        assert_eq!(submission.result, SubmissionResult::error(UNEXPECTED_ERROR));
        assert!(submission.errors.is_empty());
    }

    #[tokio::test]
    async fn test_submit_passes_previous_result() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo
            .expect_create()
            .withf(|_, previous| *previous == SubmissionResult::validation_failed())
            .times(1)
            .returning(|_, _| Ok(SubmissionResult::success("second")));

        let service = service(image_probe("image/webp"), mock_repo);
        let submission = service
            .submit(valid_record(), SubmissionResult::validation_failed())
            .await;

        assert_eq!(submission.result.id(), Some("second"));
    }

    #[test]
    fn test_precheck_and_sanitize() {
        let mut probe = MockContentProbe::new();
        probe.expect_content_type().times(0);
        let service = service(Arc::new(probe), MockPitchRepository::new());

        assert!(service.precheck(&valid_record()).is_empty());
        assert_eq!(service.sanitize(Field::Title, "", "  My   App"), "My App");
        assert_eq!(service.apply_input(Field::Category, "4"), None);
    }

    #[tokio::test]
    async fn test_get_pitch() {
        let mut mock_repo = MockPitchRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|id| {
                Ok(Some(Pitch::from_new(
                    id.to_string(),
                    NewPitch::from_record(valid_record()),
                    Utc::now(),
                )))
            });
        mock_repo
            .expect_find_by_id()
            .withf(|id| id != "abc123")
            .returning(|_| Ok(None));

        let service = service(image_probe("image/png"), mock_repo);

        let pitch = service.get_pitch("abc123").await.unwrap();
        assert_eq!(pitch.category, "Tech");

        let err = service.get_pitch("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
