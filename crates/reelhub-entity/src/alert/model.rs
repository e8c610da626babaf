//! Alert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reelhub_core::types::AlertId;

use super::severity::Severity;

/// A transient user-facing message held by the alert queue.
///
/// An alert is visible from creation until it is dismissed, either by the
/// user or automatically when its visible timer expires. Dismissed alerts
/// stay in the queue for the duration of the close transition, then the
/// queue removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Client-generated unique identifier.
    pub id: AlertId,
    /// Short title shown above the message.
    pub heading: String,
    /// The message body.
    pub message: String,
    /// Severity category.
    pub severity: Severity,
    /// Whether the alert has been dismissed and is awaiting removal.
    pub dismissed: bool,
    /// When the alert was enqueued.
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Check whether the alert should currently be rendered.
    pub fn is_visible(&self) -> bool {
        !self.dismissed
    }
}
