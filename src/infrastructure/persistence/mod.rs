//! Repository implementations.
//!
//! - [`InMemoryPitchRepository`] - Process-local pitch storage

pub mod memory_pitch_repository;

pub use memory_pitch_repository::InMemoryPitchRepository;
