//! Remote movie API configuration.

use serde::{Deserialize, Serialize};

/// Settings for reaching the movie API server.
///
/// Each operation issues a single request with no retries and no client
/// timeout, so the base URL is the only tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the API server, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4741".to_string()
}
