use serde::{Deserialize, Serialize};

use crate::domains::scoring::models::Score;

/// One listing to score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub vin: String,
    pub price: f64,
    pub miles: i64,
    pub dom: i64,
    #[serde(default)]
    pub source: Option<String>,
    /// Falls back to the stored vehicle's year when omitted
    #[serde(default)]
    pub year: Option<i32>,
}

/// Persisted scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub vin: String,
    pub score: i32,
    pub buy_max: f64,
    /// Stored reason codes, in rule order
    pub reason_codes: Vec<String>,
}

impl ScoreResponse {
    pub fn from_score(score: Score) -> Self {
        Self {
            vin: score.vin,
            score: score.score,
            buy_max: score.buy_max,
            reason_codes: score.reason_codes,
        }
    }
}
