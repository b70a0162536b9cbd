use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Vehicle model - the attributes shared by every listing of one VIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub vin: String,
    /// Model year, 0 when unknown
    pub year: i32,
    pub make: String,
    pub model: String,
    pub trim: Option<String>,
}

impl Vehicle {
    /// Vehicle with only a VIN. Used when scoring a VIN that was never ingested.
    pub fn placeholder(vin: impl Into<String>) -> Self {
        Self {
            vin: vin.into(),
            year: 0,
            make: String::new(),
            model: String::new(),
            trim: None,
        }
    }

    /// Whether the model year is known (non-zero)
    pub fn has_year(&self) -> bool {
        self.year > 0
    }

    /// Find vehicle by VIN, returning None if not found
    pub async fn find_by_vin(vin: &str, pool: &PgPool) -> Result<Option<Self>> {
        let vehicle = sqlx::query_as::<_, Self>("SELECT * FROM vehicles WHERE vin = $1")
            .bind(vin)
            .fetch_optional(pool)
            .await?;
        Ok(vehicle)
    }

    /// Insert or overwrite the vehicle attributes for this VIN
    pub async fn upsert(&self, pool: &PgPool) -> Result<Self> {
        let vehicle = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO vehicles (vin, year, make, model, trim)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (vin) DO UPDATE SET
                year = EXCLUDED.year,
                make = EXCLUDED.make,
                model = EXCLUDED.model,
                trim = EXCLUDED.trim
            RETURNING *
            "#,
        )
        .bind(&self.vin)
        .bind(self.year)
        .bind(&self.make)
        .bind(&self.model)
        .bind(&self.trim)
        .fetch_one(pool)
        .await?;
        Ok(vehicle)
    }

    /// Insert a placeholder row unless the VIN already exists
    pub async fn insert_if_absent(vin: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (vin, year, make, model, trim)
            VALUES ($1, 0, '', '', NULL)
            ON CONFLICT (vin) DO NOTHING
            "#,
        )
        .bind(vin)
        .execute(pool)
        .await?;
        Ok(())
    }
}
