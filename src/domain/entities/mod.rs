//! Core domain entities representing the form data model.
//!
//! # Entity Types
//!
//! - [`Field`] - Identifier of one form field
//! - [`PitchRecord`] - Candidate values for all fields while editing
//! - [`ErrorSet`] - Per-field validation messages for one submission attempt
//! - [`SubmissionResult`] - Tagged outcome of a submission attempt
//! - [`Pitch`] - A stored, accepted pitch
//!
//! As with other entities, creation input lives in a separate struct
//! ([`NewPitch`]) from the stored entity.

pub mod field;
pub mod pitch;
pub mod record;
pub mod submission;

pub use field::{Field, UnknownField};
pub use pitch::{NewPitch, Pitch};
pub use record::PitchRecord;
pub use submission::{ErrorSet, SubmissionResult, UNEXPECTED_ERROR, VALIDATION_FAILED};
