use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use dotenvy::dotenv;
use std::env;

/// Origins allowed by CORS when `ALLOWED_ORIGINS` is not set (local review table dev server)
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. `None` runs the in-memory store.
    pub database_url: Option<String>,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    /// Reject scoring requests for VINs that were never ingested
    pub strict_vins: bool,
    /// Year used to compute vehicle age during scoring
    pub scoring_reference_year: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            ),
            strict_vins: parse_flag(&env::var("STRICT_VINS").unwrap_or_default())
                .context("STRICT_VINS must be true or false")?,
            scoring_reference_year: match env::var("SCORING_REFERENCE_YEAR") {
                Ok(year) => parse_reference_year(&year)
                    .context("SCORING_REFERENCE_YEAR must be a positive year")?,
                Err(_) => Utc::now().year(),
            },
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_reference_year(raw: &str) -> Result<i32> {
    let year: i32 = raw.trim().parse()?;
    if year <= 0 {
        anyhow::bail!("Reference year must be positive, got {}", year);
    }
    Ok(year)
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(anyhow::anyhow!("Invalid boolean flag: {}", other)),
    }
}
