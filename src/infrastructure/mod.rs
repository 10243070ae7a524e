//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Pitch repository implementations
//! - [`probe`] - HTTP content-type probe for image links

pub mod persistence;
pub mod probe;
