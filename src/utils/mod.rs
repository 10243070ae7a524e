//! Helper functions used across the application.
//!
//! - [`id_generator`] - Pitch identifier generation and validation

pub mod id_generator;
