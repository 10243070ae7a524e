//! Domain layer containing the form data model and validation logic.
//!
//! Nothing here depends on the web framework, the HTTP client or storage.
//!
//! # Architecture
//!
//! - [`entities`] - Form fields, records, error sets and submission outcomes
//! - [`sanitizer`] - Per-keystroke input normalization
//! - [`validation`] - Named rules and the pitch form schema
//! - [`probe`] - Remote content-type lookup trait used by the link rule
//! - [`repositories`] - Pitch creation trait definitions
//!
//! # Submission Flow
//!
//! 1. Each input change passes through [`sanitizer::sanitize`]
//! 2. On submit, [`validation::PitchSchema::validate`] checks the whole record
//! 3. An accepted record is handed to [`repositories::PitchRepository::create`]

pub mod entities;
pub mod probe;
pub mod repositories;
pub mod sanitizer;
pub mod validation;
