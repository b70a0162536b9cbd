use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Channel used when the request does not name one
pub const DEFAULT_CHANNEL: &str = "email";

/// A recorded notification request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub vin: String,
    pub channel: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
