//! In-memory implementation of the pitch repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewPitch, Pitch, SubmissionResult};
use crate::domain::repositories::PitchRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_pitch_id;

/// Process-local pitch storage.
///
/// Pitches live for the lifetime of the process. Suitable for development,
/// tests, and deployments where another service owns durable storage.
#[derive(Default)]
pub struct InMemoryPitchRepository {
    pitches: RwLock<HashMap<String, Pitch>>,
}

impl InMemoryPitchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pitches.
    pub async fn len(&self) -> usize {
        self.pitches.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pitches.read().await.is_empty()
    }
}

#[async_trait]
impl PitchRepository for InMemoryPitchRepository {
    async fn create(
        &self,
        new_pitch: NewPitch,
        previous: SubmissionResult,
    ) -> Result<SubmissionResult, AppError> {
        let mut pitches = self.pitches.write().await;

        let id = unique_id(|candidate| pitches.contains_key(candidate))?;
        let pitch = Pitch::from_new(id.clone(), new_pitch, Utc::now());
        pitches.insert(id.clone(), pitch);

        tracing::info!(id = %id, resubmission = previous.is_success(), "Pitch created");
        Ok(SubmissionResult::success(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Pitch>, AppError> {
        Ok(self.pitches.read().await.get(id).cloned())
    }
}

/// Generates an identifier for which `taken` returns false.
///
/// Attempts up to 10 times before failing.
fn unique_id(taken: impl Fn(&str) -> bool) -> Result<String, AppError> {
    const MAX_ATTEMPTS: usize = 10;

    for _ in 0..MAX_ATTEMPTS {
        let id = generate_pitch_id()?;
        if !taken(&id) {
            return Ok(id);
        }
    }

    Err(AppError::internal(
        "Failed to generate unique pitch identifier",
        json!({ "reason": "Too many collisions" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_pitch() -> NewPitch {
        NewPitch {
            title: "My App".to_string(),
            description: "A tool that helps people track habits daily".to_string(),
            category: "Tech".to_string(),
            image: "https://example.com/photo.png".to_string(),
            pitch: "This app solves X by doing Y".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPitchRepository::new();
        assert!(repo.is_empty().await);

        let result = repo
            .create(new_pitch(), SubmissionResult::Initial)
            .await
            .unwrap();
        let id = result.id().expect("success result").to_string();

        let pitch = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(pitch.title, "My App");
        assert_eq!(pitch.image, "https://example.com/photo.png");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_each_create_gets_new_id() {
        let repo = InMemoryPitchRepository::new();

        let first = repo
            .create(new_pitch(), SubmissionResult::Initial)
            .await
            .unwrap();
        let second = repo.create(new_pitch(), first.clone()).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.len().await, 2);
    }

    #[test]
    fn test_unique_id_gives_up_on_collisions() {
        let err = unique_id(|_| true).unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryPitchRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }
}
