//! Tests for the type-inference cascade.

use tabprof_core::{Config, infer_field_type};
use tabprof_model::{CellValue, FieldType};

fn cells(raw: &[&str]) -> Vec<CellValue> {
    raw.iter().map(|value| CellValue::from_raw(value)).collect()
}

#[test]
fn integers_classify_as_integer() {
    let values: Vec<CellValue> = (1..=50).map(|n| CellValue::text(n.to_string())).collect();
    let config = Config::default();
    assert_eq!(infer_field_type("score", &values, &config), FieldType::Integer);
}

#[test]
fn decimals_classify_as_float() {
    let values = cells(&["1.5", "2.0", "3.25", "-0.5"]);
    let config = Config::default();
    assert_eq!(infer_field_type("price", &values, &config), FieldType::Float);
}

#[test]
fn one_fractional_value_makes_the_column_float() {
    let values = cells(&["1", "2", "3.5", "4"]);
    let config = Config::default();
    assert_eq!(infer_field_type("amount", &values, &config), FieldType::Float);
}

#[test]
fn id_named_unique_column_is_identifier() {
    let values: Vec<CellValue> = (1..=50).map(|n| CellValue::text(n.to_string())).collect();
    let config = Config::default();
    assert_eq!(infer_field_type("id", &values, &config), FieldType::Identifier);
    assert_eq!(infer_field_type("user_id", &values, &config), FieldType::Identifier);
    assert_eq!(infer_field_type("ID", &values, &config), FieldType::Identifier);
}

#[test]
fn id_named_column_with_repeats_is_not_identifier() {
    // Uniqueness 2/6 is far below the 0.9 threshold.
    let values = cells(&["1", "1", "1", "2", "2", "2"]);
    let config = Config::default();
    assert_eq!(infer_field_type("group_id", &values, &config), FieldType::Integer);
}

#[test]
fn uuid_values_are_identifier_regardless_of_name() {
    let values = cells(&[
        "123e4567-e89b-12d3-a456-426614174000",
        "00000000-0000-0000-0000-000000000001",
        "ffffffff-ffff-ffff-ffff-ffffffffffff",
    ]);
    let config = Config::default();
    assert_eq!(infer_field_type("token", &values, &config), FieldType::Identifier);
}

#[test]
fn implausible_numeric_ids_fall_through() {
    // Name matches, values are unique, but negative keys are not plausible.
    let values = cells(&["-1", "-2", "-3", "-4"]);
    let config = Config::default();
    assert_eq!(infer_field_type("record_id", &values, &config), FieldType::Integer);
}

#[test]
fn truth_literals_classify_as_boolean() {
    let config = Config::default();
    assert_eq!(
        infer_field_type("active", &cells(&["true", "false", "true"]), &config),
        FieldType::Boolean
    );
    assert_eq!(
        infer_field_type("subscribed", &cells(&["Yes", "NO", "yes"]), &config),
        FieldType::Boolean
    );
    assert_eq!(
        infer_field_type("flag", &cells(&["1", "0", "1", "0"]), &config),
        FieldType::Boolean
    );
}

#[test]
fn three_distinct_truth_literals_are_not_boolean() {
    let values = cells(&["yes", "no", "on"]);
    let config = Config::default();
    assert_eq!(infer_field_type("state", &values, &config), FieldType::Categorical);
}

#[test]
fn parseable_dates_classify_as_datetime() {
    let values = cells(&["2023-01-15", "2023-02-01", "2023-12-31"]);
    let config = Config::default();
    assert_eq!(infer_field_type("joined", &values, &config), FieldType::Datetime);
}

#[test]
fn one_bad_date_fails_the_default_parse_all_threshold() {
    let values = cells(&["2023-01-15", "2023-02-01", "not a date"]);
    let config = Config::default();
    // Falls through to categorical on low cardinality.
    assert_eq!(infer_field_type("joined", &values, &config), FieldType::Categorical);
}

#[test]
fn lowered_datetime_threshold_tolerates_bad_values() {
    let values = cells(&["2023-01-15", "2023-02-01", "2023-03-09", "not a date"]);
    let config = Config::default().with_datetime_parse_threshold(0.7);
    assert_eq!(infer_field_type("joined", &values, &config), FieldType::Datetime);
}

#[test]
fn low_cardinality_text_is_categorical() {
    let mut raw = Vec::new();
    for _ in 0..20 {
        raw.extend_from_slice(&["Engineering", "Marketing", "Sales"]);
    }
    let values = cells(&raw);
    let config = Config::default();
    assert_eq!(infer_field_type("department", &values, &config), FieldType::Categorical);
}

#[test]
fn single_distinct_value_is_categorical() {
    let values = cells(&["constant", "constant", "constant"]);
    let config = Config::default();
    assert_eq!(infer_field_type("label", &values, &config), FieldType::Categorical);
}

#[test]
fn high_cardinality_text_falls_back_to_string() {
    let raw: Vec<String> = (0..40).map(|n| format!("comment number {n} with detail")).collect();
    let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
    let values = cells(&refs);
    let config = Config::default();
    assert_eq!(infer_field_type("notes", &values, &config), FieldType::String);
}

#[test]
fn all_absent_column_is_string() {
    let values = vec![CellValue::Missing; 50];
    let config = Config::default();
    assert_eq!(infer_field_type("empty", &values, &config), FieldType::String);
}

#[test]
fn categorical_bounds_are_configurable() {
    let values = cells(&["a", "b", "c", "a", "b", "c"]);
    let strict = Config::default()
        .with_categorical_max_unique_count(2)
        .with_categorical_ratio_threshold(0.4);
    // 3 distinct over 6 rows: above the unique cap, ratio 0.5 not < 0.4.
    assert_eq!(infer_field_type("letter", &values, &strict), FieldType::String);

    let default = Config::default();
    assert_eq!(infer_field_type("letter", &values, &default), FieldType::Categorical);
}

#[test]
fn identifier_wins_over_categorical_when_both_apply() {
    // 10 distinct values over 10 rows: under the categorical unique cap,
    // but the id name and full uniqueness take precedence.
    let raw: Vec<String> = (1..=10).map(|n| format!("K{n:03}")).collect();
    let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
    let values = cells(&refs);
    let config = Config::default();
    assert_eq!(infer_field_type("product_key", &values, &config), FieldType::Identifier);
}

#[test]
fn missing_cells_do_not_affect_classification() {
    let values = cells(&["1", "", "2", "NA", "3"]);
    let config = Config::default();
    assert_eq!(infer_field_type("count", &values, &config), FieldType::Integer);
}
