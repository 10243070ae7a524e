//! HTTP request handlers for API endpoints.

pub mod health;
pub mod pitches;
pub mod sanitize;

pub use health::health_handler;
pub use pitches::{get_pitch_handler, precheck_pitch_handler, submit_pitch_handler};
pub use sanitize::sanitize_handler;
