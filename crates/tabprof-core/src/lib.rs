pub mod analyzer;
pub mod config;
pub mod datetime;
pub mod infer;
pub mod numeric;
pub mod sample;
pub mod stats;

pub use analyzer::analyze_dataset;
pub use config::{Config, NamePattern};
pub use datetime::parse_datetime;
pub use infer::infer_field_type;
pub use numeric::parse_number;
pub use sample::{SampleMode, select_rows};
pub use stats::compute_stats;
