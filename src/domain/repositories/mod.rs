//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod pitch_repository;

pub use pitch_repository::PitchRepository;

#[cfg(test)]
pub use pitch_repository::MockPitchRepository;
