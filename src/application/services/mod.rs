//! Business logic services for the application layer.

pub mod pitch_service;

pub use pitch_service::{PitchService, Submission};
