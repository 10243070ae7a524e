//! Pitch entity representing an accepted startup submission.

use chrono::{DateTime, Utc};

use super::record::PitchRecord;

/// A stored startup pitch.
#[derive(Debug, Clone)]
pub struct Pitch {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Image URL verified at submission time.
    pub image: String,
    /// Markdown body.
    pub pitch: String,
    pub created_at: DateTime<Utc>,
}

impl Pitch {
    /// Builds the stored entity from creation input and an assigned identifier.
    pub fn from_new(id: String, new_pitch: NewPitch, created_at: DateTime<Utc>) -> Self {
        let NewPitch {
            title,
            description,
            category,
            image,
            pitch,
        } = new_pitch;

        Self {
            id,
            title,
            description,
            category,
            image,
            pitch,
            created_at,
        }
    }
}

/// Input data for creating a new pitch.
///
/// Only constructed from a record that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPitch {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub pitch: String,
}

impl NewPitch {
    /// Splits a validated record into form fields and the pitch body.
    pub fn from_record(record: PitchRecord) -> Self {
        Self {
            title: record.title,
            description: record.description,
            category: record.category,
            image: record.link,
            pitch: record.pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pitch_from_record() {
        let record = PitchRecord {
            title: "My App".to_string(),
            description: "A tool that helps people track habits daily".to_string(),
            category: "Tech".to_string(),
            link: "https://example.com/photo.png".to_string(),
            pitch: "This app solves X by doing Y".to_string(),
        };

        let new_pitch = NewPitch::from_record(record);
        assert_eq!(new_pitch.image, "https://example.com/photo.png");
        assert_eq!(new_pitch.pitch, "This app solves X by doing Y");

        let now = Utc::now();
        let pitch = Pitch::from_new("abc123".to_string(), new_pitch, now);
        assert_eq!(pitch.id, "abc123");
        assert_eq!(pitch.title, "My App");
        assert_eq!(pitch.created_at, now);
    }
}
