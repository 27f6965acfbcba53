//! Shared application state for the web server.

use std::sync::Arc;

use claimcheck_client::{ApiClient, VerifierBackend};
use claimcheck_common::Config;

use crate::handlers::history::HistoryView;
use crate::handlers::result_card::ResultSession;
use crate::session::SessionStore;
use crate::templates::Templates;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub backend: Arc<dyn VerifierBackend>,
    pub templates: Templates,
    /// Mounted Home pages that hold a result.
    pub results: SessionStore<ResultSession>,
    /// Mounted History pages.
    pub history: SessionStore<HistoryView>,
}

impl AppState {
    pub fn new(backend: Arc<dyn VerifierBackend>, session_capacity: usize) -> anyhow::Result<Self> {
        Ok(Self {
            backend,
            templates: Templates::new()?,
            results: SessionStore::new(session_capacity),
            history: SessionStore::new(session_capacity),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = ApiClient::from_config(&config.backend)?;
        Self::new(Arc::new(client), config.server.session_capacity)
    }
}

pub type SharedState = Arc<AppState>;
