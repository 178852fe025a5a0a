use chrono::NaiveDateTime;

use crate::cell::CellValue;

/// Descriptor of where the in-memory dataset came from.
///
/// The profiler never reads files itself; whichever reader produced the
/// dataset records its origin here so the report can carry it through.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceInfo {
    pub path: String,
    pub format: String,
}

impl SourceInfo {
    pub fn new(path: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: format.into(),
        }
    }
}

/// A named column of raw cells.
///
/// Invariant: `values.len()` equals the owning dataset's row count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Iterate over the present (non-absent) cell texts in row order.
    pub fn present_values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().filter_map(CellValue::as_text)
    }

    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|cell| !cell.is_missing()).count()
    }
}

/// An in-memory tabular dataset, column-major, owned by the caller.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: SourceInfo,
    pub columns: Vec<Column>,
    pub row_count: usize,
    pub created_at: NaiveDateTime,
}

impl Dataset {
    pub fn new(source: SourceInfo, columns: Vec<Column>, row_count: usize) -> Self {
        Self {
            source,
            columns,
            row_count,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    /// Build a dataset from row-major string data, the shape file readers
    /// naturally produce. Cells go through [`CellValue::from_raw`]; rows
    /// shorter than the header are padded with missing cells so every
    /// column ends up with exactly `rows.len()` values.
    pub fn from_rows(source: SourceInfo, headers: Vec<String>, rows: &[Vec<String>]) -> Self {
        let row_count = rows.len();
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let values = rows
                    .iter()
                    .map(|row| {
                        row.get(index)
                            .map(|raw| CellValue::from_raw(raw))
                            .unwrap_or(CellValue::Missing)
                    })
                    .collect();
                Column::new(name, values)
            })
            .collect();
        Self::new(source, columns, row_count)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
