//! Webhook notification delivery.
//!
//! Messages are queued on a channel and delivered by a background worker so
//! that `notify` never blocks a scan cycle. Delivery is best effort: a
//! failed POST is logged and dropped, never retried.

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::error::NotifyError;
use crate::metrics;
use crate::notify::Notifier;

/// Notifier that POSTs each message as JSON to a webhook URL.
pub struct WebhookNotifier {
    sender: mpsc::UnboundedSender<String>,
}

impl WebhookNotifier {
    /// Create a webhook notifier and spawn its delivery worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(url: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(webhook_worker(url.into(), receiver));
        Self { sender }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&self, message: &str) {
        if self.sender.send(message.to_string()).is_err() {
            warn!("webhook notifier channel closed, dropping message");
        }
    }
}

/// Background worker that delivers queued messages.
async fn webhook_worker(url: String, mut receiver: mpsc::UnboundedReceiver<String>) {
    let client = reqwest::Client::new();
    info!(%url, "webhook notifier started");

    while let Some(message) = receiver.recv().await {
        match deliver(&client, &url, &message).await {
            Ok(()) => metrics::inc_notifications_sent(),
            Err(e) => error!(error = %e, "webhook delivery failed"),
        }
    }

    warn!("webhook notifier worker shutting down");
}

/// POST one message to the webhook endpoint.
async fn deliver(client: &reqwest::Client, url: &str, message: &str) -> Result<(), NotifyError> {
    let payload = serde_json::json!({ "text": message });
    let response = client.post(url).json(&payload).send().await?;

    if !response.status().is_success() {
        return Err(NotifyError::Rejected(format!(
            "status {}",
            response.status()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notify_queues_without_blocking() {
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/unreachable");

        // Delivery will fail in the background; notify itself must not block
        // or panic.
        notifier.notify("test message");
    }
}
