//! Form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fields of a pitch submission form.
///
/// The declaration order is the display order of the form, which is also the
/// iteration order of [`crate::domain::entities::ErrorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Category,
    /// Image URL of the startup.
    Link,
    /// Markdown pitch body.
    Pitch,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Category,
        Field::Link,
        Field::Pitch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
            Field::Link => "link",
            Field::Pitch => "pitch",
        }
    }

    /// Maximum length enforced while typing, in characters.
    ///
    /// `None` means the sanitizer does not cap the field; the validator may
    /// still apply its own bounds at submission time.
    pub fn input_max_len(&self) -> Option<usize> {
        match self {
            Field::Title => Some(100),
            Field::Description => Some(500),
            Field::Category => Some(20),
            Field::Link | Field::Pitch => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
