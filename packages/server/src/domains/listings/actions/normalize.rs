//! Raw feed payload -> canonical vehicle + listing.
//!
//! Pure: no storage access. Defaults:
//! - vin: trimmed, upper-cased, required
//! - price: number or numeric string, required, non-negative
//! - year / miles / dom: 0 when absent or malformed; negative or oversized miles/dom rejected
//! - make / model: trimmed, empty when absent
//! - trim / source: trimmed, absent when blank
//! - radius: 25 when absent, malformed or zero

use serde_json::Value;

use crate::common::coerce::{as_f64, as_i64, as_text};
use crate::common::{normalize_vin, BuyerError, BuyerResult};
use crate::domains::listings::data::RawListing;
use crate::domains::listings::models::listing::{CreateListing, DEFAULT_RADIUS};
use crate::domains::vehicles::Vehicle;

/// Canonical form of one raw listing, ready to store
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub vehicle: Vehicle,
    pub listing: CreateListing,
}

pub fn normalize_listing(raw: &RawListing) -> BuyerResult<NormalizedListing> {
    let vin = as_text(raw.vin.as_ref())
        .map(|vin| normalize_vin(&vin))
        .unwrap_or_default();
    if vin.is_empty() {
        return Err(BuyerError::Validation("vin is required".into()));
    }

    let price = match raw.price.as_ref() {
        None => return Err(BuyerError::Validation(format!("price is required for {}", vin))),
        Some(value) => as_f64(Some(value)).ok_or_else(|| {
            BuyerError::Validation(format!("price for {} is not a number", vin))
        })?,
    };
    if price < 0.0 {
        return Err(BuyerError::Validation(format!("price for {} must not be negative", vin)));
    }

    let miles = non_negative(raw.miles.as_ref(), "miles", &vin)?;
    let dom = non_negative(raw.dom.as_ref(), "dom", &vin)?;
    let year = as_i64(raw.year.as_ref())
        .and_then(|year| i32::try_from(year).ok())
        .filter(|year| *year > 0)
        .unwrap_or(0);
    let radius = as_i64(raw.radius.as_ref())
        .and_then(|radius| i32::try_from(radius).ok())
        .filter(|radius| *radius > 0)
        .unwrap_or(DEFAULT_RADIUS);

    let vehicle = Vehicle {
        vin: vin.clone(),
        year,
        make: as_text(raw.make.as_ref()).unwrap_or_default(),
        model: as_text(raw.model.as_ref()).unwrap_or_default(),
        trim: optional_text(raw.trim.as_ref()),
    };

    let listing = CreateListing {
        vin,
        source: optional_text(raw.source.as_ref()),
        price,
        miles,
        dom,
        radius,
        payload: Value::Object(raw.extra.clone()),
    };

    Ok(NormalizedListing { vehicle, listing })
}

fn non_negative(value: Option<&Value>, field: &str, vin: &str) -> BuyerResult<i32> {
    match as_i64(value) {
        Some(n) if n < 0 => Err(BuyerError::Validation(format!(
            "{} for {} must not be negative",
            field, vin
        ))),
        Some(n) => i32::try_from(n).map_err(|_| {
            BuyerError::Validation(format!("{} for {} is out of range", field, vin))
        }),
        None => Ok(0),
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    as_text(value).filter(|text| !text.is_empty())
}
