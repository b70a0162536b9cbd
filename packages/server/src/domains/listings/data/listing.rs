use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::listings::models::{Listing, ListingWithScore};
use crate::domains::vehicles::Vehicle;

/// Listing row as the review table consumes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingData {
    pub id: i64,
    pub vin: String,

    // Vehicle
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,

    // Observation
    pub miles: i32,
    pub price: f64,
    pub dom: i32,
    pub source: Option<String>,
    pub radius: i32,

    // Current score
    pub score: Option<i32>,
    pub buy_max: Option<f64>,
    pub reason_codes: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl ListingData {
    /// Freshly ingested listing; it has not been scored yet
    pub fn from_parts(listing: Listing, vehicle: &Vehicle) -> Self {
        Self {
            id: listing.id,
            vin: listing.vin,
            year: vehicle.year,
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            trim: vehicle.trim.clone(),
            miles: listing.miles,
            price: listing.price,
            dom: listing.dom,
            source: listing.source,
            radius: listing.radius,
            score: None,
            buy_max: None,
            reason_codes: Vec::new(),
            created_at: listing.created_at,
        }
    }
}

impl From<ListingWithScore> for ListingData {
    fn from(row: ListingWithScore) -> Self {
        Self {
            id: row.id,
            vin: row.vin,
            year: row.year,
            make: row.make,
            model: row.model,
            trim: row.trim,
            miles: row.miles,
            price: row.price,
            dom: row.dom,
            source: row.source,
            radius: row.radius,
            score: row.score,
            buy_max: row.buy_max,
            reason_codes: row.reason_codes.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
