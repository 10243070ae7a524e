//! # Pitch Form
//!
//! Backend of a "startup pitch" submission form: keystroke sanitization,
//! whole-record validation with a remote image check, and pitch creation.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Form entities, sanitizer, validation rules
//! - **Application Layer** ([`application`]) - Submission service and form session
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP image probe, in-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Submission Flow
//!
//! 1. Every input change is normalized by [`domain::sanitizer::sanitize`]
//! 2. On submit, [`domain::validation::PitchSchema`] checks every field and
//!    probes the image link with a `HEAD` request
//! 3. Accepted records go to [`domain::repositories::PitchRepository::create`]
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:3000/api/pitches -H 'content-type: application/json' \
//!   -d '{"record":{"title":"My App","description":"A tool that helps people track habits daily","category":"Tech","link":"https://example.com/photo.png","pitch":"This app solves X by doing Y"}}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::form_session::{FormSession, SessionError};
    pub use crate::application::services::{PitchService, Submission};
    pub use crate::domain::entities::{ErrorSet, Field, PitchRecord, SubmissionResult};
    pub use crate::domain::probe::ContentProbe;
    pub use crate::domain::validation::PitchSchema;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
