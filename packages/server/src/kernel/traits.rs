// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Normalization and scoring live in the domains and call these traits.
//
// Naming convention: Base* for trait names (e.g., BaseListingStore)

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::domains::listings::models::{CreateListing, Listing, ListingWithScore};
use crate::domains::notifications::models::Notification;
use crate::domains::scoring::models::{CreateScore, Score};
use crate::domains::vehicles::Vehicle;

/// Which backend a store writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Memory,
    Postgres,
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::Memory => write!(f, "memory"),
            StorageKind::Postgres => write!(f, "postgres"),
        }
    }
}

// =============================================================================
// Listing Store Trait (Infrastructure - vehicles, listings, scores)
// =============================================================================

#[async_trait]
pub trait BaseListingStore: Send + Sync {
    fn kind(&self) -> StorageKind;

    /// Cheap round trip proving the backend answers
    async fn ping(&self) -> Result<()>;

    /// Insert or overwrite the vehicle row for `vehicle.vin`
    async fn upsert_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle>;

    /// Insert a placeholder vehicle unless the VIN already exists
    async fn insert_vehicle_if_absent(&self, vin: &str) -> Result<()>;

    async fn find_vehicle(&self, vin: &str) -> Result<Option<Vehicle>>;

    /// Append a listing. The vehicle must already exist.
    async fn insert_listing(&self, input: CreateListing) -> Result<Listing>;

    /// Append a score. The vehicle must already exist.
    async fn insert_score(&self, input: CreateScore) -> Result<Score>;

    /// Newest score for the VIN, highest id winning timestamp ties
    async fn latest_score(&self, vin: &str) -> Result<Option<Score>>;

    /// Every listing joined with its vehicle and current score, newest first
    async fn list_listings_with_scores(&self) -> Result<Vec<ListingWithScore>>;
}

// =============================================================================
// Notifier Trait (Infrastructure - buyer notifications)
// =============================================================================

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Hand a notification to the delivery channel
    async fn send(&self, notification: &Notification) -> Result<()>;
}
