//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PitchService;

#[derive(Clone)]
pub struct AppState {
    pub pitch_service: Arc<PitchService>,
}

impl AppState {
    pub fn new(pitch_service: Arc<PitchService>) -> Self {
        Self { pitch_service }
    }
}
