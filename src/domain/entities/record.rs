//! The in-progress form record.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Candidate values for every field of the pitch form.
///
/// All five fields are always present while the form is being edited; an
/// untouched field is the empty string. Missing keys in JSON input
/// deserialize to empty strings for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: String,
    pub pitch: String,
}

impl PitchRecord {
    /// Returns the candidate value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Category => &self.category,
            Field::Link => &self.link,
            Field::Pitch => &self.pitch,
        }
    }

    /// Replaces the candidate value of `field`.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Category => &mut self.category,
            Field::Link => &mut self.link,
            Field::Pitch => &mut self.pitch,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut record = PitchRecord::default();
        assert_eq!(record.get(Field::Category), "");

        record.set(Field::Category, "Tech".to_string());
        assert_eq!(record.get(Field::Category), "Tech");
        assert_eq!(record.category, "Tech");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let record: PitchRecord = serde_json::from_str(r#"{"title":"My App"}"#).unwrap();
        assert_eq!(record.title, "My App");
        assert_eq!(record.description, "");
        assert_eq!(record.pitch, "");
    }
}
