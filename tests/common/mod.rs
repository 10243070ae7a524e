#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

use pitch_form::application::services::PitchService;
use pitch_form::domain::entities::PitchRecord;
use pitch_form::domain::probe::ContentProbe;
use pitch_form::domain::validation::PitchSchema;
use pitch_form::infrastructure::persistence::InMemoryPitchRepository;
use pitch_form::api::handlers::health_handler;
use pitch_form::api::routes::routes;
use pitch_form::state::AppState;

/// Probe returning a fixed content type and counting calls.
pub struct StaticProbe {
    content_type: Option<String>,
    calls: AtomicUsize,
}

impl StaticProbe {
    pub fn new(content_type: Option<&str>) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProbe for StaticProbe {
    async fn content_type(&self, _url: &Url) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.content_type.clone()
    }
}

pub fn create_test_state(probe: Arc<dyn ContentProbe>) -> AppState {
    let service = PitchService::new(
        PitchSchema::new(probe),
        Arc::new(InMemoryPitchRepository::new()),
    );
    AppState::new(Arc::new(service))
}

/// Production routes without the outer middleware.
pub fn create_test_app(probe: Arc<dyn ContentProbe>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", routes())
        .with_state(create_test_state(probe))
}

pub fn valid_record() -> PitchRecord {
    PitchRecord {
        title: "My App".to_string(),
        description: "A tool that helps people track habits daily".to_string(),
        category: "Tech".to_string(),
        link: "https://example.com/photo.png".to_string(),
        pitch: "This app solves X by doing Y".to_string(),
    }
}
