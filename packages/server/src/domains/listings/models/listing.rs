use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Default search radius (miles) when a feed does not send one
pub const DEFAULT_RADIUS: i32 = 25;

/// Listing - one observation of a vehicle for sale. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub vin: String,
    pub source: Option<String>,
    pub price: f64,
    pub miles: i32,
    pub dom: i32,
    pub radius: i32,
    /// Feed fields the normalizer did not recognise, kept verbatim
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Input for appending a listing
#[derive(Debug, Clone, PartialEq)]
pub struct CreateListing {
    pub vin: String,
    pub source: Option<String>,
    pub price: f64,
    pub miles: i32,
    pub dom: i32,
    pub radius: i32,
    pub payload: serde_json::Value,
}

/// Listing joined with its vehicle and the VIN's current score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ListingWithScore {
    pub id: i64,
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
    pub source: Option<String>,
    pub price: f64,
    pub miles: i32,
    pub dom: i32,
    pub radius: i32,
    pub created_at: DateTime<Utc>,
    pub score: Option<i32>,
    pub buy_max: Option<f64>,
    pub reason_codes: Option<Vec<String>>,
}

impl Listing {
    /// Append a new listing row
    pub async fn create(input: CreateListing, pool: &PgPool) -> Result<Self> {
        let listing = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO listings (vin, source, price, miles, dom, radius, payload)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&input.vin)
        .bind(&input.source)
        .bind(input.price)
        .bind(input.miles)
        .bind(input.dom)
        .bind(input.radius)
        .bind(&input.payload)
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }

    /// Find every listing for a VIN, oldest first
    pub async fn find_by_vin(vin: &str, pool: &PgPool) -> Result<Vec<Self>> {
        let listings = sqlx::query_as::<_, Self>(
            "SELECT * FROM listings WHERE vin = $1 ORDER BY created_at, id",
        )
        .bind(vin)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// All listings with vehicle attributes and current score, newest first
    pub async fn find_all_with_scores(pool: &PgPool) -> Result<Vec<ListingWithScore>> {
        let rows = sqlx::query_as::<_, ListingWithScore>(
            r#"
            SELECT
                l.id, l.vin,
                COALESCE(v.year, 0) AS year,
                COALESCE(v.make, '') AS make,
                COALESCE(v.model, '') AS model,
                v.trim,
                l.source, l.price, l.miles, l.dom, l.radius, l.created_at,
                s.score, s.buy_max, s.reason_codes
            FROM listings l
            LEFT JOIN vehicles v ON v.vin = l.vin
            LEFT JOIN v_latest_scores s ON s.vin = l.vin
            ORDER BY l.created_at DESC, l.id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
