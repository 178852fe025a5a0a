use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a column, inferred from its name and values.
///
/// The taxonomy is closed: every column resolves to exactly one variant,
/// with `String` as the total fallback. `Boolean` and `Identifier` keep
/// their own tag for display but are statistically treated as categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Categorical,
    Identifier,
}

impl FieldType {
    /// Returns the lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Datetime => "datetime",
            FieldType::Categorical => "categorical",
            FieldType::Identifier => "identifier",
        }
    }

    /// Whether the column's statistics are the numerical block.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Float)
    }

    /// Whether the column's statistics are the categorical block.
    pub fn is_categorical_like(&self) -> bool {
        matches!(
            self,
            FieldType::Boolean | FieldType::Categorical | FieldType::Identifier
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
