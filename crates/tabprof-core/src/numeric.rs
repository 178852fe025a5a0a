/// Parse a raw cell as a finite number.
///
/// Non-finite results (`inf`, `nan` spellings accepted by the stdlib
/// float parser) are rejected: they are not usable as column statistics
/// and must not tip a column into the numeric types.
pub fn parse_number(value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => None,
    }
}
