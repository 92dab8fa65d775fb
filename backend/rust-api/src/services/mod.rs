use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::Config;
use crate::models::events::QuizEvent;

pub mod presentation;
pub mod quiz_session;
pub mod scoring;
pub mod session_service;
pub mod session_store;
pub mod session_sweeper;

use session_service::SessionService;
use session_store::{InMemorySessionStore, SessionStore};

pub struct AppState {
    pub config: Config,
    pub sessions: Arc<dyn SessionStore>,
    pub events: broadcast::Sender<QuizEvent>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_store(config: Config, sessions: Arc<dyn SessionStore>) -> Self {
        let (events, _) = broadcast::channel(config.event_channel_capacity.max(1));

        tracing::info!(
            "Application state ready (session ttl {}s, event capacity {})",
            config.session_ttl_secs,
            config.event_channel_capacity
        );

        Self {
            config,
            sessions,
            events,
        }
    }

    pub fn session_service(&self) -> SessionService {
        SessionService::new(
            self.sessions.clone(),
            self.events.clone(),
            self.config.session_ttl(),
        )
    }
}
