//! Per-type statistics over a column's present values.
//!
//! Absent cells never enter an aggregate but always count toward the
//! block's `missing_count`. A present value that fails to parse under the
//! inferred type (a stray word in a numeric column, an unparseable date)
//! also counts as missing for stats purposes. Values are returned at full
//! precision; rounding belongs to the report consumer.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use tabprof_model::{
    CategoricalStats, CellValue, DatetimeStats, FieldStats, FieldType, NumericalStats, Quartiles,
    StringStats, ValueCount,
};

use crate::config::Config;
use crate::datetime::parse_datetime;
use crate::numeric::parse_number;

/// Compute the stats block matching the inferred field type.
///
/// `values.len()` is the dataset row count; the invariant
/// `missing_count + present_count == values.len()` holds in every block.
pub fn compute_stats(field_type: FieldType, values: &[CellValue], config: &Config) -> FieldStats {
    let total_rows = values.len();
    match field_type {
        FieldType::Integer | FieldType::Float => {
            FieldStats::Numerical(numerical_stats(values, total_rows))
        }
        FieldType::Boolean => {
            FieldStats::Categorical(categorical_stats(values, total_rows, config, true))
        }
        FieldType::Categorical | FieldType::Identifier => {
            FieldStats::Categorical(categorical_stats(values, total_rows, config, false))
        }
        FieldType::String => FieldStats::String(string_stats(values, total_rows)),
        FieldType::Datetime => FieldStats::Datetime(datetime_stats(values, total_rows, config)),
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Linear-interpolation quantile: position `p * (n - 1)` over the sorted
/// values, blending the two bracketing order statistics.
fn interpolated_quantile(sorted: &[f64], fraction: f64) -> f64 {
    let position = fraction * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

fn numerical_stats(values: &[CellValue], total_rows: usize) -> NumericalStats {
    let mut parsed: Vec<f64> = values
        .iter()
        .filter_map(CellValue::as_text)
        .filter_map(parse_number)
        .collect();
    let missing_count = total_rows - parsed.len();
    let missing_percentage = percentage(missing_count, total_rows);

    if parsed.is_empty() {
        return NumericalStats {
            min_value: None,
            max_value: None,
            mean: None,
            median: None,
            std_dev: None,
            quartiles: None,
            missing_count,
            missing_percentage,
        };
    }

    parsed.sort_by(f64::total_cmp);
    let count = parsed.len();
    let mean = parsed.iter().sum::<f64>() / count as f64;
    let std_dev = if count < 2 {
        None
    } else {
        let variance = parsed
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count as f64 - 1.0);
        Some(variance.sqrt())
    };

    NumericalStats {
        min_value: Some(parsed[0]),
        max_value: Some(parsed[count - 1]),
        mean: Some(mean),
        median: Some(interpolated_quantile(&parsed, 0.5)),
        std_dev,
        quartiles: Some(Quartiles {
            q25: interpolated_quantile(&parsed, 0.25),
            q50: interpolated_quantile(&parsed, 0.5),
            q75: interpolated_quantile(&parsed, 0.75),
        }),
        missing_count,
        missing_percentage,
    }
}

/// Boolean columns record values in canonical display form.
fn canonical_bool_label(value: &str) -> String {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "t" | "y" | "on" => "True".to_string(),
        _ => "False".to_string(),
    }
}

fn categorical_stats(
    values: &[CellValue],
    total_rows: usize,
    config: &Config,
    canonicalize_bool: bool,
) -> CategoricalStats {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut present_count = 0usize;
    for value in values.iter().filter_map(CellValue::as_text) {
        present_count += 1;
        let key = if canonicalize_bool {
            canonical_bool_label(value)
        } else {
            value.to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    let missing_count = total_rows - present_count;
    let unique_count = counts.len();

    // BTreeMap iteration is value-ascending; the stable sort by count
    // descending therefore breaks ties lexicographically.
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    let top_values = entries
        .into_iter()
        .take(config.top_k)
        .map(|(value, count)| ValueCount {
            value,
            count,
            percentage: percentage(count, total_rows),
        })
        .collect();

    CategoricalStats {
        unique_count,
        top_values,
        missing_count,
        missing_percentage: percentage(missing_count, total_rows),
    }
}

fn string_stats(values: &[CellValue], total_rows: usize) -> StringStats {
    let mut lengths: Vec<usize> = Vec::new();
    let mut distinct: BTreeSet<&str> = BTreeSet::new();
    for value in values.iter().filter_map(CellValue::as_text) {
        lengths.push(value.chars().count());
        distinct.insert(value);
    }
    let missing_count = total_rows - lengths.len();
    let missing_percentage = percentage(missing_count, total_rows);

    if lengths.is_empty() {
        return StringStats {
            min_length: None,
            max_length: None,
            avg_length: None,
            unique_count: 0,
            missing_count,
            missing_percentage,
        };
    }

    StringStats {
        min_length: lengths.iter().min().copied(),
        max_length: lengths.iter().max().copied(),
        avg_length: Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64),
        unique_count: distinct.len(),
        missing_count,
        missing_percentage,
    }
}

fn datetime_stats(values: &[CellValue], total_rows: usize, config: &Config) -> DatetimeStats {
    let parsed: Vec<NaiveDateTime> = values
        .iter()
        .filter_map(CellValue::as_text)
        .filter_map(|value| parse_datetime(value, &config.datetime_formats))
        .collect();
    let missing_count = total_rows - parsed.len();
    let distinct: BTreeSet<NaiveDateTime> = parsed.iter().copied().collect();

    DatetimeStats {
        min_date: parsed.iter().min().copied(),
        max_date: parsed.iter().max().copied(),
        unique_count: distinct.len(),
        missing_count,
        missing_percentage: percentage(missing_count, total_rows),
    }
}
