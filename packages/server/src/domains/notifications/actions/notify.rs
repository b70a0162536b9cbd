use chrono::Utc;
use tracing::info;

use crate::common::{normalize_vin, BuyerResult};
use crate::domains::notifications::data::{NotifyRequest, NotifyResponse};
use crate::domains::notifications::models::{Notification, DEFAULT_CHANNEL};
use crate::kernel::ServerDeps;

/// Record one notification per request and acknowledge each, in order.
///
/// VINs are not looked up: unknown VINs are acknowledged like any other.
pub async fn notify_vins(
    requests: Vec<NotifyRequest>,
    deps: &ServerDeps,
) -> BuyerResult<Vec<NotifyResponse>> {
    let mut responses = Vec::with_capacity(requests.len());

    for request in requests {
        let notification = build_notification(request);
        deps.notifier.send(&notification).await?;
        responses.push(NotifyResponse {
            vin: notification.vin,
            notified: true,
            channel: notification.channel,
        });
    }

    info!(count = responses.len(), "Notifications recorded");
    Ok(responses)
}

fn build_notification(request: NotifyRequest) -> Notification {
    let vin = normalize_vin(&request.vin);
    let channel = request
        .channel
        .map(|channel| channel.trim().to_string())
        .filter(|channel| !channel.is_empty())
        .unwrap_or_else(|| DEFAULT_CHANNEL.to_string());
    let message = request
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Notify for VIN {}", vin));

    Notification {
        vin,
        channel,
        message,
        created_at: Utc::now(),
    }
}
