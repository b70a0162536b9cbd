/// Canonical VIN form: surrounding whitespace removed, upper-cased.
pub fn normalize_vin(raw: &str) -> String {
    raw.trim().to_uppercase()
}
