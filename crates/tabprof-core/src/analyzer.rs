//! Report assembly: runs inference and statistics per column, in source
//! column order, and aggregates the dataset-level report.
//!
//! Columns are independent (each owns its values, the config is shared by
//! reference), so this loop could fan out per column and reassemble by
//! index; the reference implementation stays sequential.

use std::time::Instant;

use tracing::{debug, info};

use tabprof_model::{AnalysisReport, CellValue, Column, ColumnProfile, Dataset, Result};

use crate::config::Config;
use crate::infer::infer_field_type;
use crate::stats::compute_stats;

/// Profile every column of the dataset and assemble the report.
///
/// The only error source is a malformed config; classification and
/// statistics themselves are total.
pub fn analyze_dataset(dataset: &Dataset, config: &Config) -> Result<AnalysisReport> {
    config.validate()?;
    let started = Instant::now();

    let fields: Vec<ColumnProfile> = dataset
        .columns
        .iter()
        .map(|column| profile_column(column, config))
        .collect();
    let completeness_percentage = completeness(&fields);
    let processing_time_seconds = started.elapsed().as_secs_f64();

    info!(
        rows = dataset.row_count,
        columns = fields.len(),
        seconds = processing_time_seconds,
        completeness = completeness_percentage,
        "dataset analysis complete"
    );

    Ok(AnalysisReport {
        file_path: dataset.source.path.clone(),
        file_type: dataset.source.format.clone(),
        total_rows: dataset.row_count,
        total_columns: dataset.columns.len(),
        fields,
        analysis_timestamp: chrono::Local::now().naive_local(),
        processing_time_seconds,
        completeness_percentage,
    })
}

fn profile_column(column: &Column, config: &Config) -> ColumnProfile {
    let field_type = infer_field_type(&column.name, &column.values, config);
    let stats = compute_stats(field_type, &column.values, config);
    let sample_values: Vec<String> = column
        .values
        .iter()
        .filter_map(CellValue::as_text)
        .take(config.sample_value_count)
        .map(str::to_string)
        .collect();

    debug!(
        column = %column.name,
        field_type = %field_type,
        missing_percentage = stats.missing_percentage(),
        "profiled column"
    );

    ColumnProfile {
        name: column.name.clone(),
        field_type,
        total_count: column.present_count(),
        stats,
        sample_values,
    }
}

/// 100 minus the mean per-column missing percentage, rounded to two
/// decimals. A dataset with no columns is trivially complete.
fn completeness(fields: &[ColumnProfile]) -> f64 {
    if fields.is_empty() {
        return 100.0;
    }
    let average_missing = fields
        .iter()
        .map(|field| field.stats.missing_percentage())
        .sum::<f64>()
        / fields.len() as f64;
    ((100.0 - average_missing) * 100.0).round() / 100.0
}
