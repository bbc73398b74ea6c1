//! Application state.

use std::sync::Arc;

use momo_verify_store::RocksStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<RocksStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<RocksStore>, config: ServiceConfig) -> Self {
        if config.webhook_secret.is_some() {
            tracing::info!("SMS webhook signature verification enabled");
        } else {
            tracing::warn!("WEBHOOK_SECRET not configured - accepting unsigned SMS webhooks");
        }

        Self { store, config }
    }
}
