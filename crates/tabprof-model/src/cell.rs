/// Markers that source readers commonly emit for missing cells.
const NULL_MARKERS: &[&str] = &["na", "n/a", "nan", "null", "none"];

/// A single cell of a column: either raw text or an absent value.
///
/// The profiler never casts cells in place; typed views (numbers, dates)
/// are derived on demand during inference and statistics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Build a cell from raw source text, mapping empty strings and the
    /// common null markers (case-insensitive) to [`CellValue::Missing`].
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        let lowered = trimmed.to_ascii_lowercase();
        if NULL_MARKERS.contains(&lowered.as_str()) {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// Build a present cell without null-marker interpretation.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            CellValue::Missing => None,
        }
    }
}
