//! The alert queue: ordered, auto-expiring user-facing messages.
//!
//! Each alert carries two one-shot timers: a visible timer that dismisses
//! it after a fixed duration, and a removal timer that drops it from the
//! queue once the close transition has elapsed. Both timers are stored as
//! abortable task handles keyed by alert id, and every queue transition
//! runs under the same lock, so a timer that fires after its alert was
//! removed can never touch the queue.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use reelhub_core::config::alerts::AlertConfig;
use reelhub_core::types::AlertId;
use reelhub_entity::alert::{Alert, Severity};

/// Ordered queue of transient alerts with automatic expiry.
///
/// Renderers consume immutable snapshots in insertion order (oldest
/// first); removal never reorders survivors. Cheap to clone; all clones
/// share the same queue.
#[derive(Debug, Clone)]
pub struct AlertQueue {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Current queue snapshot, republished wholesale on every mutation.
    snapshot: watch::Sender<Arc<[Alert]>>,
    /// Outstanding timer handles per alert.
    timers: Mutex<HashMap<AlertId, Timers>>,
    /// Visible/close durations.
    config: AlertConfig,
}

#[derive(Debug, Default)]
struct Timers {
    visible: Option<JoinHandle<()>>,
    removal: Option<JoinHandle<()>>,
}

impl Timers {
    fn abort_all(&mut self) {
        if let Some(handle) = self.visible.take() {
            handle.abort();
        }
        if let Some(handle) = self.removal.take() {
            handle.abort();
        }
    }
}

impl AlertQueue {
    /// Create an empty queue with the given timing configuration.
    pub fn new(config: AlertConfig) -> Self {
        let (tx, _rx) = watch::channel(Arc::from(Vec::<Alert>::new()));
        Self {
            inner: Arc::new(Inner {
                snapshot: tx,
                timers: Mutex::new(HashMap::new()),
                config,
            }),
        }
    }

    /// Append a visible alert and start its visible timer.
    ///
    /// Returns the generated id so callers can dismiss it manually.
    pub fn enqueue(
        &self,
        heading: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> AlertId {
        let alert = Alert {
            id: AlertId::new(),
            heading: heading.into(),
            message: message.into(),
            severity,
            dismissed: false,
            created_at: Utc::now(),
        };
        let id = alert.id;

        let mut timers = self.lock_timers();
        self.publish(|alerts| alerts.push(alert));
        timers.insert(
            id,
            Timers {
                visible: Some(self.spawn_visible_timer(id)),
                removal: None,
            },
        );

        tracing::debug!(%id, "alert enqueued");
        id
    }

    /// Mark an alert as dismissed and schedule its removal.
    ///
    /// Equivalent to the visible timer expiring. No-op when the id is not
    /// present (already removed) or the alert is already dismissed.
    pub fn request_dismiss(&self, id: AlertId) {
        let mut timers = self.lock_timers();
        let Some(entry) = timers.get_mut(&id) else {
            return;
        };
        let dismissed = self
            .inner
            .snapshot
            .borrow()
            .iter()
            .any(|a| a.id == id && a.dismissed);
        if dismissed {
            return;
        }

        if let Some(handle) = entry.visible.take() {
            handle.abort();
        }
        self.publish(|alerts| {
            if let Some(alert) = alerts.iter_mut().find(|a| a.id == id) {
                alert.dismissed = true;
            }
        });
        entry.removal = Some(self.spawn_removal_timer(id));

        tracing::debug!(%id, "alert dismissed");
    }

    /// Remove an alert from the queue and cancel its timers.
    ///
    /// No-op when the id is not present.
    pub fn remove(&self, id: AlertId) {
        let mut timers = self.lock_timers();
        if let Some(mut entry) = timers.remove(&id) {
            entry.abort_all();
        }
        let present = self.inner.snapshot.borrow().iter().any(|a| a.id == id);
        if present {
            self.publish(|alerts| alerts.retain(|a| a.id != id));
            tracing::debug!(%id, "alert removed");
        }
    }

    /// Cancel every outstanding timer.
    ///
    /// Called when the hosting surface is torn down, so no timer can fire
    /// into a queue nobody observes anymore.
    pub fn shutdown(&self) {
        let mut timers = self.lock_timers();
        for (_, mut entry) in timers.drain() {
            entry.abort_all();
        }
        tracing::debug!("alert queue shut down");
    }

    /// Return the current snapshot in insertion order.
    pub fn alerts(&self) -> Arc<[Alert]> {
        self.inner.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Alert]>> {
        self.inner.snapshot.subscribe()
    }

    fn lock_timers(&self) -> MutexGuard<'_, HashMap<AlertId, Timers>> {
        // A panicked timer task cannot leave the queue unusable.
        self.inner
            .timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Publish a new snapshot. Must be called with the timers lock held so
    /// queue transitions stay serialized.
    fn publish(&self, mutate: impl FnOnce(&mut Vec<Alert>)) {
        let mut alerts: Vec<Alert> = self.inner.snapshot.borrow().to_vec();
        mutate(&mut alerts);
        self.inner.snapshot.send_replace(Arc::from(alerts));
    }

    fn spawn_visible_timer(&self, id: AlertId) -> JoinHandle<()> {
        let queue = self.clone();
        let visible = Duration::from_millis(self.inner.config.visible_ms);
        tokio::spawn(async move {
            tokio::time::sleep(visible).await;
            queue.request_dismiss(id);
        })
    }

    fn spawn_removal_timer(&self, id: AlertId) -> JoinHandle<()> {
        let queue = self.clone();
        let close = Duration::from_millis(self.inner.config.close_ms);
        tokio::spawn(async move {
            tokio::time::sleep(close).await;
            queue.remove(id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> AlertQueue {
        AlertQueue::new(AlertConfig::default())
    }

    async fn settle(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_order_matches_enqueue_order() {
        let queue = queue();
        let a = queue.enqueue("A", "first", Severity::Info);
        let b = queue.enqueue("B", "second", Severity::Success);
        let c = queue.enqueue("C", "third", Severity::Warning);

        let ids: Vec<_> = queue.alerts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![a, b, c]);

        // Removing from the middle never reorders survivors.
        queue.remove(b);
        let ids: Vec<_> = queue.alerts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_visible_timer_dismisses_then_removes() {
        let queue = queue();
        queue.enqueue("H", "M", Severity::Success);

        // Just before the visible duration: still visible.
        settle(4_900).await;
        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].is_visible());

        // Past the visible duration: dismissed but still present.
        settle(200).await;
        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].dismissed);

        // Past the close transition: removed.
        settle(400).await;
        assert!(queue.alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_lingers_for_close_transition() {
        let queue = queue();
        let id = queue.enqueue("H", "M", Severity::Danger);

        queue.request_dismiss(id);

        // Inside the close window the alert is present but dismissed.
        settle(100).await;
        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].dismissed);

        // After the close window it is gone.
        settle(300).await;
        assert!(queue.alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_cancels_pending_timers() {
        let queue = queue();
        let id = queue.enqueue("H", "M", Severity::Info);
        let keeper = queue.enqueue("K", "stays", Severity::Info);

        settle(1_000).await;
        queue.remove(id);
        assert_eq!(queue.alerts().len(), 1);

        // Long past both durations: the cancelled timers never fired, the
        // removed id never resurrects, the survivor is untouched.
        settle(10_000).await;
        let alerts = queue.alerts();
        assert!(alerts.iter().all(|a| a.id != id));
        // The keeper ran through its own lifecycle and is gone too.
        assert!(alerts.iter().all(|a| a.id != keeper));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_of_absent_id_is_noop() {
        let queue = queue();
        let id = queue.enqueue("H", "M", Severity::Warning);
        queue.remove(id);

        // Neither call may error or re-insert the alert.
        queue.request_dismiss(id);
        queue.remove(id);
        assert!(queue.alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_dismiss_keeps_single_removal() {
        let queue = queue();
        let id = queue.enqueue("H", "M", Severity::Success);

        queue.request_dismiss(id);
        queue.request_dismiss(id);

        settle(100).await;
        assert_eq!(queue.alerts().len(), 1);
        settle(300).await;
        assert!(queue.alerts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_all_timers() {
        let queue = queue();
        queue.enqueue("H", "M", Severity::Info);
        queue.enqueue("H2", "M2", Severity::Info);

        queue.shutdown();

        // With the timers aborted nothing ever auto-dismisses.
        settle(20_000).await;
        let alerts = queue.alerts();
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.is_visible()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_each_snapshot() {
        let queue = queue();
        let mut rx = queue.subscribe();

        let id = queue.enqueue("H", "M", Severity::Success);
        rx.changed().await.expect("enqueue snapshot");
        assert_eq!(rx.borrow().len(), 1);

        queue.request_dismiss(id);
        rx.changed().await.expect("dismiss snapshot");
        let snapshot = rx.borrow().clone();
        assert!(snapshot[0].dismissed);
    }
}
