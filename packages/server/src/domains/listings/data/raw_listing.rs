use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A listing exactly as a feed posts it.
///
/// Every known field is optional and loosely typed; the normalizer decides
/// what is required and how absent or malformed values default. Unknown
/// keys are collected into `extra` and stored as the listing payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miles: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
