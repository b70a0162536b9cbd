use serde::{Deserialize, Serialize};

/// Request to notify the buyer about a VIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub vin: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement for one VIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub vin: String,
    pub notified: bool,
    pub channel: String,
}
