//! Pure scoring heuristic for vehicle listings
//!
//! No side effects, no clock: vehicle age is measured against the
//! scorer's configured reference year so a listing always scores the same.

use serde::{Deserialize, Serialize};

use crate::common::{BuyerError, BuyerResult};

/// Every score starts here before rules fire
pub const BASELINE_SCORE: f64 = 50.0;

/// Listings younger than this many days earn `LowDOM`
pub const LOW_DOM_THRESHOLD: i64 = 20;
pub const LOW_DOM_BONUS: f64 = 15.0;

/// Mileage expectation per year of age
pub const TYPICAL_MILES_PER_YEAR: f64 = 12_000.0;
/// Expected mileage when the model year is unknown
pub const UNKNOWN_AGE_EXPECTED_MILES: f64 = 62_500.0;
/// `LowMiles` fires below this share of the expected mileage
pub const LOW_MILES_RATIO: f64 = 0.8;
pub const LOW_MILES_BONUS: f64 = 15.0;

/// Minimum discount vs. baseline before `PriceVsBaseline` fires
pub const PRICE_DISCOUNT_THRESHOLD: f64 = 0.05;
pub const MAX_PRICE_BONUS: f64 = 20.0;

/// Listings older than this many days get `AgedInventory`
pub const AGED_INVENTORY_DOM: i64 = 45;
pub const AGED_INVENTORY_PENALTY: f64 = 15.0;

/// Market baseline when the model year is unknown
pub const DEFAULT_BASELINE_PRICE: f64 = 25_000.0;
/// Typical new-vehicle price depreciated by age to estimate the baseline
pub const REFERENCE_NEW_PRICE: f64 = 38_000.0;
pub const ANNUAL_DEPRECIATION: f64 = 0.12;
pub const MIN_BASELINE_PRICE: f64 = 2_000.0;

/// buy_max = baseline * (FLOOR + SPAN * score / 100)
pub const BUY_MAX_FLOOR_RATIO: f64 = 0.85;
pub const BUY_MAX_SCORE_SPAN: f64 = 0.30;

/// Which scoring rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    #[serde(rename = "LowDOM")]
    LowDom,
    LowMiles,
    PriceVsBaseline,
    AgedInventory,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::LowDom => "LowDOM",
            ReasonCode::LowMiles => "LowMiles",
            ReasonCode::PriceVsBaseline => "PriceVsBaseline",
            ReasonCode::AgedInventory => "AgedInventory",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the scorer looks at
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringInput {
    pub vin: String,
    pub price: f64,
    pub miles: i64,
    pub dom: i64,
    pub source: Option<String>,
    /// Model year; `None` or non-positive means unknown
    pub year: Option<i32>,
}

/// Result of scoring one listing
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    /// 0..=100
    pub score: i32,
    pub buy_max: f64,
    /// In rule order; empty when nothing fired
    pub reason_codes: Vec<ReasonCode>,
    pub baseline_price: f64,
}

/// Heuristic scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    reference_year: i32,
}

impl Scorer {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Score a listing.
    ///
    /// Algorithm:
    /// - start at 50
    /// - dom < 20 -> +15 (`LowDOM`)
    /// - miles < 80% of expected mileage for the age -> +15 (`LowMiles`)
    /// - price >= 5% under the baseline -> + discount% capped at 20 (`PriceVsBaseline`)
    /// - dom > 45 -> -15 (`AgedInventory`)
    /// - clamp to [0, 100] and truncate
    ///
    /// Fails with `Validation` for an empty VIN or negative/non-finite numbers.
    pub fn score(&self, input: &ScoringInput) -> BuyerResult<ScoreOutcome> {
        validate(input)?;

        let age = self.age(input.year);
        let baseline_price = estimate_baseline_price(age);
        let mut reason_codes = Vec::new();
        let mut score = BASELINE_SCORE;

        if input.dom < LOW_DOM_THRESHOLD {
            score += LOW_DOM_BONUS;
            reason_codes.push(ReasonCode::LowDom);
        }

        let expected_miles = match age {
            Some(age) => f64::from(age.max(1)) * TYPICAL_MILES_PER_YEAR,
            None => UNKNOWN_AGE_EXPECTED_MILES,
        };
        if (input.miles as f64) < expected_miles * LOW_MILES_RATIO {
            score += LOW_MILES_BONUS;
            reason_codes.push(ReasonCode::LowMiles);
        }

        let discount = (baseline_price - input.price) / baseline_price;
        if discount >= PRICE_DISCOUNT_THRESHOLD {
            score += (discount * 100.0).min(MAX_PRICE_BONUS);
            reason_codes.push(ReasonCode::PriceVsBaseline);
        }

        if input.dom > AGED_INVENTORY_DOM {
            score -= AGED_INVENTORY_PENALTY;
            reason_codes.push(ReasonCode::AgedInventory);
        }

        let score = score.clamp(0.0, 100.0).trunc() as i32;
        let buy_max = round_cents(
            baseline_price * (BUY_MAX_FLOOR_RATIO + BUY_MAX_SCORE_SPAN * f64::from(score) / 100.0),
        );

        Ok(ScoreOutcome {
            score,
            buy_max,
            reason_codes,
            baseline_price: round_cents(baseline_price),
        })
    }

    /// Vehicle age in whole years; `None` when the year is unknown.
    /// Years after the reference year count as age 0.
    fn age(&self, year: Option<i32>) -> Option<i32> {
        year.filter(|year| *year > 0)
            .map(|year| self.reference_year.saturating_sub(year).max(0))
    }
}

/// Estimated market price for a vehicle of the given age
pub fn estimate_baseline_price(age: Option<i32>) -> f64 {
    match age {
        Some(age) => (REFERENCE_NEW_PRICE * (1.0 - ANNUAL_DEPRECIATION).powi(age))
            .max(MIN_BASELINE_PRICE),
        None => DEFAULT_BASELINE_PRICE,
    }
}

fn validate(input: &ScoringInput) -> BuyerResult<()> {
    if input.vin.trim().is_empty() {
        return Err(BuyerError::Validation("vin is required".into()));
    }
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(BuyerError::Validation(format!(
            "price for {} must be a non-negative number",
            input.vin
        )));
    }
    if input.miles < 0 {
        return Err(BuyerError::Validation(format!(
            "miles for {} must not be negative",
            input.vin
        )));
    }
    if input.dom < 0 {
        return Err(BuyerError::Validation(format!(
            "dom for {} must not be negative",
            input.vin
        )));
    }
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
