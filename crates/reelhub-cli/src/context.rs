//! Application context shared across all views and flows.

use std::sync::Arc;

use reelhub_client::ApiClient;
use reelhub_core::config::AppConfig;
use reelhub_core::result::AppResult;
use reelhub_session::{AlertQueue, SessionStore};

use crate::output::OutputFormat;

/// Shared dependencies for the whole application.
///
/// Created once at startup and passed by reference to every view and
/// flow; the containers inside are cheap clones over shared state.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// API gateway client.
    pub client: ApiClient,
    /// Session identity store.
    pub session: SessionStore,
    /// Transient alert queue.
    pub alerts: AlertQueue,
    /// Output format for listings.
    pub format: OutputFormat,
}

impl AppContext {
    /// Build the context from loaded configuration.
    pub fn new(config: AppConfig, format: OutputFormat) -> AppResult<Self> {
        let client = ApiClient::new(&config.api)?;
        let alerts = AlertQueue::new(config.alerts.clone());

        Ok(Self {
            config: Arc::new(config),
            client,
            session: SessionStore::new(),
            alerts,
            format,
        })
    }
}
