//! Shared application state for the podwatch server.
//!
//! Owns the single presence tracker for the process and the pre-rendered
//! index page. Cloned cheaply into every handler via axum `State`.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::page;
use crate::presence::PresenceTracker;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    presence: Arc<PresenceTracker>,
}

struct AppStateInner {
    cfg: AppConfig,
    index_html: String,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        Self::with_tracker(cfg, Arc::new(PresenceTracker::new()))
    }

    /// Build state around an existing tracker (tests inspect it directly).
    pub fn with_tracker(cfg: AppConfig, presence: Arc<PresenceTracker>) -> Self {
        let index_html = page::render_index(&cfg.env_block());
        Self {
            inner: Arc::new(AppStateInner { cfg, index_html }),
            presence,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn index_html(&self) -> &str {
        &self.inner.index_html
    }

    pub fn presence(&self) -> Arc<PresenceTracker> {
        Arc::clone(&self.presence)
    }
}
