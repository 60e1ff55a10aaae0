//! Notification collaborators.
//!
//! Delivery is fire-and-forget per detected opportunity: a failed delivery
//! is logged by the implementation and never retried by the scanner.

pub mod webhook;

use std::sync::{Arc, Mutex};

use tracing::info;

use crate::metrics;

pub use webhook::WebhookNotifier;

/// Sink for human-readable opportunity messages.
pub trait Notifier: Send + Sync {
    /// Deliver one message, best effort.
    fn notify(&self, message: &str);
}

/// Notifier that writes each message as a structured log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        metrics::inc_notifications_sent();
        info!(target: "surebet_scanner::notify", %message, "opportunity");
    }
}

/// Notifier that collects messages in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryNotifier {
    /// Create an empty collecting notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message delivered so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        metrics::inc_notifications_sent();
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_notifier_collects_messages() {
        let notifier = MemoryNotifier::new();
        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn memory_notifier_clones_share_storage() {
        let notifier = MemoryNotifier::new();
        let clone = notifier.clone();
        clone.notify("shared");

        assert_eq!(notifier.messages(), vec!["shared"]);
    }
}
