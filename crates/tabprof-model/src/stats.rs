use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Quartile cut points from the linear-interpolation rank method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
}

/// Statistics for integer and float columns.
///
/// Aggregates are `None` when no value in the column parses numerically;
/// `std_dev` additionally requires at least two parsed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalStats {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub quartiles: Option<Quartiles>,
    pub missing_count: usize,
    pub missing_percentage: f64,
}

/// One entry of a categorical frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    /// Share of all rows (missing included), 0..=100.
    pub percentage: f64,
}

/// Statistics for categorical, boolean, and identifier columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStats {
    pub unique_count: usize,
    /// Most frequent values, count descending, ties broken by value
    /// ascending, capped at the configured top-K.
    pub top_values: Vec<ValueCount>,
    pub missing_count: usize,
    pub missing_percentage: f64,
}

/// Statistics for free-text columns. Lengths are character counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringStats {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub avg_length: Option<f64>,
    pub unique_count: usize,
    pub missing_count: usize,
    pub missing_percentage: f64,
}

/// Statistics for datetime columns, over the parseable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatetimeStats {
    #[serde(with = "crate::timefmt::datetime_opt")]
    pub min_date: Option<NaiveDateTime>,
    #[serde(with = "crate::timefmt::datetime_opt")]
    pub max_date: Option<NaiveDateTime>,
    pub unique_count: usize,
    pub missing_count: usize,
    pub missing_percentage: f64,
}

/// Per-column statistics, exactly one variant per inferred field type.
///
/// On the wire this flattens into four nullable blocks with exactly one
/// non-null (see [`crate::report::ColumnProfile`]); in memory the sum type
/// makes the exclusivity structural.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldStats {
    Numerical(NumericalStats),
    Categorical(CategoricalStats),
    String(StringStats),
    Datetime(DatetimeStats),
}

impl FieldStats {
    /// Missing count for stats purposes: source-absent cells plus present
    /// cells that failed to parse under the inferred type.
    pub fn missing_count(&self) -> usize {
        match self {
            FieldStats::Numerical(stats) => stats.missing_count,
            FieldStats::Categorical(stats) => stats.missing_count,
            FieldStats::String(stats) => stats.missing_count,
            FieldStats::Datetime(stats) => stats.missing_count,
        }
    }

    pub fn missing_percentage(&self) -> f64 {
        match self {
            FieldStats::Numerical(stats) => stats.missing_percentage,
            FieldStats::Categorical(stats) => stats.missing_percentage,
            FieldStats::String(stats) => stats.missing_percentage,
            FieldStats::Datetime(stats) => stats.missing_percentage,
        }
    }
}
