pub mod cell;
pub mod dataset;
pub mod error;
pub mod field_type;
pub mod report;
pub mod stats;
pub mod timefmt;

pub use cell::CellValue;
pub use dataset::{Column, Dataset, SourceInfo};
pub use error::{ProfileError, Result};
pub use field_type::FieldType;
pub use report::{AnalysisReport, ColumnProfile};
pub use stats::{
    CategoricalStats, DatetimeStats, FieldStats, NumericalStats, Quartiles, StringStats,
    ValueCount,
};
