use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::field_type::FieldType;
use crate::stats::{CategoricalStats, DatetimeStats, FieldStats, NumericalStats, StringStats};

/// Profile of a single column.
///
/// Serializes to the downstream `FieldProfile` shape: the [`FieldStats`]
/// sum type fans out into four nullable blocks of which exactly one is
/// non-null, selected by `field_type`. Deserialization re-checks that
/// exclusivity and restores the sum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldProfileWire", into = "FieldProfileWire")]
pub struct ColumnProfile {
    pub name: String,
    pub field_type: FieldType,
    /// Present (non-absent) raw cell count, not the row count.
    pub total_count: usize,
    pub stats: FieldStats,
    /// First present raw values in encounter order, capped small.
    pub sample_values: Vec<String>,
}

/// Wire form of [`ColumnProfile`], field-for-field per the report contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldProfileWire {
    name: String,
    field_type: FieldType,
    total_count: usize,
    categorical_stats: Option<CategoricalStats>,
    numerical_stats: Option<NumericalStats>,
    string_stats: Option<StringStats>,
    datetime_stats: Option<DatetimeStats>,
    sample_values: Vec<String>,
}

impl From<ColumnProfile> for FieldProfileWire {
    fn from(profile: ColumnProfile) -> Self {
        let mut wire = FieldProfileWire {
            name: profile.name,
            field_type: profile.field_type,
            total_count: profile.total_count,
            categorical_stats: None,
            numerical_stats: None,
            string_stats: None,
            datetime_stats: None,
            sample_values: profile.sample_values,
        };
        match profile.stats {
            FieldStats::Numerical(stats) => wire.numerical_stats = Some(stats),
            FieldStats::Categorical(stats) => wire.categorical_stats = Some(stats),
            FieldStats::String(stats) => wire.string_stats = Some(stats),
            FieldStats::Datetime(stats) => wire.datetime_stats = Some(stats),
        }
        wire
    }
}

impl TryFrom<FieldProfileWire> for ColumnProfile {
    type Error = ProfileError;

    fn try_from(wire: FieldProfileWire) -> Result<Self, Self::Error> {
        let populated = usize::from(wire.categorical_stats.is_some())
            + usize::from(wire.numerical_stats.is_some())
            + usize::from(wire.string_stats.is_some())
            + usize::from(wire.datetime_stats.is_some());
        if populated != 1 {
            return Err(ProfileError::MalformedReport(format!(
                "field '{}' has {populated} stats blocks, expected exactly 1",
                wire.name
            )));
        }
        let stats = if let Some(stats) = wire.numerical_stats {
            FieldStats::Numerical(stats)
        } else if let Some(stats) = wire.categorical_stats {
            FieldStats::Categorical(stats)
        } else if let Some(stats) = wire.string_stats {
            FieldStats::String(stats)
        } else if let Some(stats) = wire.datetime_stats {
            FieldStats::Datetime(stats)
        } else {
            return Err(ProfileError::MalformedReport(format!(
                "field '{}' has no stats block",
                wire.name
            )));
        };
        Ok(ColumnProfile {
            name: wire.name,
            field_type: wire.field_type,
            total_count: wire.total_count,
            stats,
            sample_values: wire.sample_values,
        })
    }
}

/// The complete profiling report for one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub file_path: String,
    pub file_type: String,
    pub total_rows: usize,
    pub total_columns: usize,
    pub fields: Vec<ColumnProfile>,
    #[serde(with = "crate::timefmt::datetime_micros")]
    pub analysis_timestamp: NaiveDateTime,
    pub processing_time_seconds: f64,
    /// 100 minus the average per-column missing percentage, rounded to
    /// two decimals.
    pub completeness_percentage: f64,
}
