// Test fixtures for listings and score requests

use serde_json::{json, Value};

/// The listing used throughout the buyer review walkthrough
pub const ACCORD_VIN: &str = "1HGCM82633A004352";

pub fn accord_listing() -> Value {
    json!({
        "vin": ACCORD_VIN,
        "price": 18950,
        "miles": 41000,
        "dom": 27,
        "year": 2019,
        "make": "Honda",
        "model": "Accord",
        "trim": "EX-L",
        "source": "dealer-feed"
    })
}

pub fn accord_score_request() -> Value {
    json!({
        "vin": ACCORD_VIN,
        "price": 18950,
        "miles": 41000,
        "dom": 27,
        "source": "dealer-feed"
    })
}

/// A minimal listing with only the required fields
pub fn bare_listing(vin: &str, price: f64) -> Value {
    json!({ "vin": vin, "price": price })
}
