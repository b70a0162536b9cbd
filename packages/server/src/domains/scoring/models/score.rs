use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Score model - one scoring result for a VIN. Rows are append-only;
/// the current score is the newest row (highest id on equal timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Score {
    pub id: i64,
    pub vin: String,
    pub score: i32,
    pub buy_max: f64,
    pub reason_codes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for appending a score
#[derive(Debug, Clone, PartialEq)]
pub struct CreateScore {
    pub vin: String,
    pub score: i32,
    pub buy_max: f64,
    pub reason_codes: Vec<String>,
}

impl Score {
    /// Append a new score row
    pub async fn create(input: CreateScore, pool: &PgPool) -> Result<Self> {
        let score = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO scores (vin, score, buy_max, reason_codes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&input.vin)
        .bind(input.score)
        .bind(input.buy_max)
        .bind(&input.reason_codes)
        .fetch_one(pool)
        .await?;
        Ok(score)
    }

    /// Current score for a VIN
    pub async fn find_latest_by_vin(vin: &str, pool: &PgPool) -> Result<Option<Self>> {
        let score = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM scores
            WHERE vin = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(vin)
        .fetch_optional(pool)
        .await?;
        Ok(score)
    }
}
