//! In-memory store used when no database is configured.
//!
//! All tables sit behind one `RwLock`, so each call sees a consistent
//! snapshot. Ids are assigned under the write lock, so id order is write
//! order; "newest" means highest id here, independent of the wall clock.
//! Nothing survives a restart.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;

use super::traits::{BaseListingStore, StorageKind};
use crate::domains::listings::models::{CreateListing, Listing, ListingWithScore};
use crate::domains::scoring::models::{CreateScore, Score};
use crate::domains::vehicles::Vehicle;

#[derive(Default)]
struct Tables {
    vehicles: HashMap<String, Vehicle>,
    listings: Vec<Listing>,
    scores: Vec<Score>,
    last_listing_id: i64,
    last_score_id: i64,
}

impl Tables {
    fn latest_score(&self, vin: &str) -> Option<&Score> {
        self.scores
            .iter()
            .filter(|score| score.vin == vin)
            .max_by_key(|score| score.id)
    }
}

pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Number of stored vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .vehicles
            .len()
    }

    /// Number of stored listings.
    pub fn listing_count(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .listings
            .len()
    }

    /// Number of stored scores.
    pub fn score_count(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .scores
            .len()
    }
}

#[async_trait]
impl BaseListingStore for MemoryStore {
    fn kind(&self) -> StorageKind {
        StorageKind::Memory
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn upsert_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables
            .vehicles
            .insert(vehicle.vin.clone(), vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn insert_vehicle_if_absent(&self, vin: &str) -> Result<()> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        tables
            .vehicles
            .entry(vin.to_string())
            .or_insert_with(|| Vehicle::placeholder(vin));
        Ok(())
    }

    async fn find_vehicle(&self, vin: &str) -> Result<Option<Vehicle>> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        Ok(tables.vehicles.get(vin).cloned())
    }

    async fn insert_listing(&self, input: CreateListing) -> Result<Listing> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        if !tables.vehicles.contains_key(&input.vin) {
            bail!("vehicle {} does not exist", input.vin);
        }

        tables.last_listing_id += 1;
        let listing = Listing {
            id: tables.last_listing_id,
            vin: input.vin,
            source: input.source,
            price: input.price,
            miles: input.miles,
            dom: input.dom,
            radius: input.radius,
            payload: input.payload,
            created_at: Utc::now(),
        };
        tables.listings.push(listing.clone());
        Ok(listing)
    }

    async fn insert_score(&self, input: CreateScore) -> Result<Score> {
        let mut tables = self.tables.write().unwrap_or_else(|e| e.into_inner());
        if !tables.vehicles.contains_key(&input.vin) {
            bail!("vehicle {} does not exist", input.vin);
        }
        if !(0..=100).contains(&input.score) {
            bail!("score {} for {} is outside 0..=100", input.score, input.vin);
        }

        tables.last_score_id += 1;
        let score = Score {
            id: tables.last_score_id,
            vin: input.vin,
            score: input.score,
            buy_max: input.buy_max,
            reason_codes: input.reason_codes,
            created_at: Utc::now(),
        };
        tables.scores.push(score.clone());
        Ok(score)
    }

    async fn latest_score(&self, vin: &str) -> Result<Option<Score>> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());
        Ok(tables.latest_score(vin).cloned())
    }

    async fn list_listings_with_scores(&self) -> Result<Vec<ListingWithScore>> {
        let tables = self.tables.read().unwrap_or_else(|e| e.into_inner());

        let mut latest: HashMap<&str, &Score> = HashMap::new();
        for score in &tables.scores {
            let newer = latest
                .get(score.vin.as_str())
                .map_or(true, |current| score.id > current.id);
            if newer {
                latest.insert(score.vin.as_str(), score);
            }
        }

        let mut rows: Vec<ListingWithScore> = tables
            .listings
            .iter()
            .map(|listing| {
                let vehicle = tables.vehicles.get(&listing.vin);
                let score = latest.get(listing.vin.as_str());
                ListingWithScore {
                    id: listing.id,
                    vin: listing.vin.clone(),
                    year: vehicle.map_or(0, |v| v.year),
                    make: vehicle.map(|v| v.make.clone()).unwrap_or_default(),
                    model: vehicle.map(|v| v.model.clone()).unwrap_or_default(),
                    trim: vehicle.and_then(|v| v.trim.clone()),
                    source: listing.source.clone(),
                    price: listing.price,
                    miles: listing.miles,
                    dom: listing.dom,
                    radius: listing.radius,
                    created_at: listing.created_at,
                    score: score.map(|s| s.score),
                    buy_max: score.map(|s| s.buy_max),
                    reason_codes: score.map(|s| s.reason_codes.clone()),
                }
            })
            .collect();

        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }
}
