//! Alert queue timing configuration.

use serde::{Deserialize, Serialize};

/// Timing for the transient alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// How long an alert stays visible before it auto-dismisses, in
    /// milliseconds.
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,
    /// Delay between dismissal and removal from the queue, in milliseconds.
    /// Matches the close transition of the rendered alert.
    #[serde(default = "default_close_ms")]
    pub close_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            visible_ms: default_visible_ms(),
            close_ms: default_close_ms(),
        }
    }
}

fn default_visible_ms() -> u64 {
    5000
}

fn default_close_ms() -> u64 {
    300
}
