//! Application state shared across handlers

use std::sync::Arc;

use application::{DestinationService, SessionService};
use infrastructure::{AppConfig, TemplateEngine};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Per-session trip state and trip drawing
    pub sessions: Arc<SessionService>,
    /// Cultural places around a destination
    pub destinations: Arc<DestinationService>,
    /// Page renderer
    pub templates: TemplateEngine,
    /// Schedule resources that failed to load at startup
    pub load_failures: Arc<Vec<String>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.session_count())
            .field("load_failures", &self.load_failures.len())
            .finish_non_exhaustive()
    }
}
