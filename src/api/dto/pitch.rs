//! DTOs for stored pitches.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Pitch;

/// Public representation of a stored pitch.
#[derive(Debug, Serialize)]
pub struct PitchResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub pitch: String,
    pub created_at: DateTime<Utc>,
}

impl From<Pitch> for PitchResponse {
    fn from(pitch: Pitch) -> Self {
        Self {
            id: pitch.id,
            title: pitch.title,
            description: pitch.description,
            category: pitch.category,
            image: pitch.image,
            pitch: pitch.pitch,
            created_at: pitch.created_at,
        }
    }
}
