///! Status update delivery to the external listener
///!
///! Each finalized snapshot is posted as JSON to the listener's
///! status-update endpoint from its own background task. Delivery is
///! best-effort: failures become log lines, never retries, and never
///! reach the event handling that triggered them.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::StatusUpdate;
use crate::config::TrackerConfig;

const STATUS_UPDATE_PATH: &str = "/api/status-update";

/// A single delivery attempt that did not reach a successful response.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("status update request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("listener answered with status {0}")]
    Rejected(StatusCode),
}

/// Posts status updates to the configured listener.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct StatusNotifier {
    client: Client,
    endpoint: String,
}

impl StatusNotifier {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
            endpoint: format!("http://{}{}", config.listener_address(), STATUS_UPDATE_PATH),
        }
    }

    /// Hand a snapshot to a background task and return immediately.
    ///
    /// The task logs a delivery failure and terminates; the caller never
    /// observes the outcome.
    pub fn dispatch(&self, update: StatusUpdate) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.deliver(&update).await {
                tracing::warn!(
                    "Status update for {} ({}) not delivered: {}",
                    update.callsign,
                    update.status.as_code(),
                    e
                );
            }
        });
    }

    /// Perform one delivery attempt.
    ///
    /// Only the response status code is inspected; the body is dropped.
    pub async fn deliver(&self, update: &StatusUpdate) -> Result<(), DeliveryError> {
        tracing::debug!(
            "Posting status update for {} to {}",
            update.callsign,
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(update).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status));
        }

        tracing::debug!("Listener acknowledged {} with {}", update.callsign, status);
        Ok(())
    }
}
