//! Stub notifier: records notifications in memory instead of delivering them.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::traits::BaseNotifier;
use crate::domains::notifications::models::Notification;

#[derive(Default)]
pub struct StubNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl StubNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notification recorded so far, oldest first
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Check if a VIN has been notified on any channel
    pub fn was_notified(&self, vin: &str) -> bool {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|n| n.vin == vin)
    }
}

#[async_trait]
impl BaseNotifier for StubNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(
            vin = %notification.vin,
            channel = %notification.channel,
            "Recording notification (stub, not delivered)"
        );
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification.clone());
        Ok(())
    }
}
