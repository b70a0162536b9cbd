//! PostgreSQL-backed store.
//!
//! Thin adapter over the domain models' query methods. Schema lives in
//! `migrations/` and is applied by `connect`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::traits::{BaseListingStore, StorageKind};
use crate::domains::listings::models::{CreateListing, Listing, ListingWithScore};
use crate::domains::scoring::models::{CreateScore, Score};
use crate::domains::vehicles::Vehicle;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wrap an existing pool. Migrations are the caller's concern.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        info!("Database connected");

        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations complete");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl BaseListingStore for PostgresStore {
    fn kind(&self) -> StorageKind {
        StorageKind::Postgres
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database ping failed")?;
        Ok(())
    }

    async fn upsert_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle> {
        vehicle.upsert(&self.pool).await
    }

    async fn insert_vehicle_if_absent(&self, vin: &str) -> Result<()> {
        Vehicle::insert_if_absent(vin, &self.pool).await
    }

    async fn find_vehicle(&self, vin: &str) -> Result<Option<Vehicle>> {
        Vehicle::find_by_vin(vin, &self.pool).await
    }

    async fn insert_listing(&self, input: CreateListing) -> Result<Listing> {
        Listing::create(input, &self.pool).await
    }

    async fn insert_score(&self, input: CreateScore) -> Result<Score> {
        Score::create(input, &self.pool).await
    }

    async fn latest_score(&self, vin: &str) -> Result<Option<Score>> {
        Score::find_latest_by_vin(vin, &self.pool).await
    }

    async fn list_listings_with_scores(&self) -> Result<Vec<ListingWithScore>> {
        Listing::find_all_with_scores(&self.pool).await
    }
}
