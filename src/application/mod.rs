//! Application layer orchestrating the form flow.
//!
//! # Modules
//!
//! - [`services::pitch_service::PitchService`] - Sanitization, validation and pitch creation
//! - [`form_session::FormSession`] - Client-side form state with single in-flight submission

pub mod form_session;
pub mod services;
