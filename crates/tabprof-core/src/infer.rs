//! Field type inference: an ordered priority cascade over a column's
//! name and present values. The first matching rule wins; `String` is the
//! total fallback, so classification never fails.

use std::collections::BTreeSet;

use tabprof_model::{CellValue, FieldType};

use crate::config::Config;
use crate::datetime::parse_datetime;
use crate::numeric::parse_number;

/// Truth literals accepted for boolean columns, lowercased.
const TRUTH_LITERALS: &[&str] = &[
    "true", "false", "yes", "no", "1", "0", "t", "f", "y", "n", "on", "off",
];

/// Classify one column. Deterministic and total.
pub fn infer_field_type(column_name: &str, values: &[CellValue], config: &Config) -> FieldType {
    let present: Vec<&str> = values.iter().filter_map(CellValue::as_text).collect();
    if present.is_empty() {
        return FieldType::String;
    }

    if is_identifier(column_name, &present, config) {
        return FieldType::Identifier;
    }
    if is_boolean(&present) {
        return FieldType::Boolean;
    }
    if datetime_ratio(&present, config) >= config.datetime_parse_threshold {
        return FieldType::Datetime;
    }
    if let Some(numeric) = numeric_field_type(&present, config) {
        return numeric;
    }
    if is_categorical(&present, config) {
        return FieldType::Categorical;
    }
    FieldType::String
}

fn unique_count(present: &[&str]) -> usize {
    present.iter().copied().collect::<BTreeSet<_>>().len()
}

fn uniqueness_ratio(present: &[&str]) -> f64 {
    unique_count(present) as f64 / present.len() as f64
}

/// Syntactic UUID check: 8-4-4-4-12 hex groups.
fn is_uuid(value: &str) -> bool {
    if value.len() != 36 {
        return false;
    }
    value.bytes().enumerate().all(|(index, byte)| match index {
        8 | 13 | 18 | 23 => byte == b'-',
        _ => byte.is_ascii_hexdigit(),
    })
}

/// Identifier rule: UUID-shaped columns qualify on value shape alone;
/// otherwise the column name must look identifier-ish and the present
/// values must be nearly all distinct. Name-matched all-numeric columns
/// must additionally sit in a plausible key range (non-negative, below
/// `id_plausible_max`).
fn is_identifier(column_name: &str, present: &[&str], config: &Config) -> bool {
    let uuid_count = present.iter().filter(|value| is_uuid(value)).count();
    if uuid_count as f64 / present.len() as f64 >= config.id_uniqueness_threshold {
        return true;
    }

    let lowered = column_name.trim().to_ascii_lowercase();
    if !config
        .id_name_patterns
        .iter()
        .any(|pattern| pattern.matches(&lowered))
    {
        return false;
    }
    if uniqueness_ratio(present) < config.id_uniqueness_threshold {
        return false;
    }

    let parsed: Vec<f64> = present.iter().filter_map(|value| parse_number(value)).collect();
    if parsed.len() == present.len() {
        parsed
            .iter()
            .all(|value| *value >= 0.0 && *value < config.id_plausible_max)
    } else {
        true
    }
}

/// Boolean rule: every present value normalizes into the truth-literal
/// set, with at most two distinct normalized values.
fn is_boolean(present: &[&str]) -> bool {
    let mut distinct: BTreeSet<String> = BTreeSet::new();
    for value in present {
        let normalized = value.trim().to_ascii_lowercase();
        if !TRUTH_LITERALS.contains(&normalized.as_str()) {
            return false;
        }
        distinct.insert(normalized);
        if distinct.len() > 2 {
            return false;
        }
    }
    true
}

fn datetime_ratio(present: &[&str], config: &Config) -> f64 {
    let parsed = present
        .iter()
        .filter(|value| parse_datetime(value, &config.datetime_formats).is_some())
        .count();
    parsed as f64 / present.len() as f64
}

/// Numeric rule: enough values parse as finite numbers; Integer when no
/// parsed value carries a fractional part.
fn numeric_field_type(present: &[&str], config: &Config) -> Option<FieldType> {
    let parsed: Vec<f64> = present.iter().filter_map(|value| parse_number(value)).collect();
    if parsed.is_empty() {
        return None;
    }
    if (parsed.len() as f64 / present.len() as f64) < config.numeric_parse_threshold {
        return None;
    }
    if parsed.iter().all(|value| value.fract() == 0.0) {
        Some(FieldType::Integer)
    } else {
        Some(FieldType::Float)
    }
}

fn is_categorical(present: &[&str], config: &Config) -> bool {
    let unique = unique_count(present);
    unique <= config.categorical_max_unique_count
        || (unique as f64 / present.len() as f64) < config.categorical_ratio_threshold
}

#[cfg(test)]
mod tests {
    use super::is_uuid;

    #[test]
    fn uuid_shape() {
        assert!(is_uuid("123e4567-e89b-12d3-a456-426614174000"));
        assert!(is_uuid("123E4567-E89B-12D3-A456-426614174000"));
        assert!(!is_uuid("123e4567e89b12d3a456426614174000"));
        assert!(!is_uuid("123e4567-e89b-12d3-a456-42661417400"));
        assert!(!is_uuid("123e4567-e89b-12d3-a456-42661417400g"));
    }
}
