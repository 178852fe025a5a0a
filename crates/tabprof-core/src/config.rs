use tabprof_model::{ProfileError, Result};

/// Case-insensitive match rule for identifier-ish column names.
///
/// Patterns are matched against the lowercased, trimmed column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    Exact(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
}

impl NamePattern {
    pub fn matches(&self, lowered_name: &str) -> bool {
        match self {
            NamePattern::Exact(fragment) => lowered_name == fragment,
            NamePattern::Prefix(fragment) => lowered_name.starts_with(fragment),
            NamePattern::Suffix(fragment) => lowered_name.ends_with(fragment),
            NamePattern::Contains(fragment) => lowered_name.contains(fragment),
        }
    }
}

fn default_id_name_patterns() -> Vec<NamePattern> {
    vec![
        NamePattern::Exact("id".to_string()),
        NamePattern::Suffix("_id".to_string()),
        NamePattern::Prefix("id_".to_string()),
        NamePattern::Contains("identifier".to_string()),
        NamePattern::Suffix("key".to_string()),
        NamePattern::Suffix("code".to_string()),
        NamePattern::Contains("uuid".to_string()),
        NamePattern::Exact("pk".to_string()),
        NamePattern::Suffix("pk".to_string()),
    ]
}

fn default_datetime_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%b-%Y",
    ]
    .iter()
    .map(|format| (*format).to_string())
    .collect()
}

/// Immutable thresholds and limits for classification and statistics.
///
/// Built once, validated up front, then shared by reference across the
/// engine. Malformed thresholds are the only hard error in the core;
/// everything downstream is a total computation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum present-value uniqueness ratio for identifier columns.
    pub id_uniqueness_threshold: f64,
    /// Name rules that mark a column as identifier-ish.
    pub id_name_patterns: Vec<NamePattern>,
    /// Exclusive upper bound for plausible numeric identifiers.
    pub id_plausible_max: f64,
    /// Minimum parse-success ratio for datetime classification.
    pub datetime_parse_threshold: f64,
    /// Minimum parse-success ratio for integer/float classification.
    pub numeric_parse_threshold: f64,
    /// Distinct-value cap under which a column is categorical outright.
    pub categorical_max_unique_count: usize,
    /// Uniqueness ratio below which a column is categorical.
    pub categorical_ratio_threshold: f64,
    /// Frequency-table entries kept per categorical column.
    pub top_k: usize,
    /// Raw values carried into each column profile for display.
    pub sample_value_count: usize,
    /// chrono format strings tried in order for datetime parsing.
    pub datetime_formats: Vec<String>,
    /// Seed for random row sampling; `None` uses the thread RNG.
    pub sample_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_uniqueness_threshold: 0.9,
            id_name_patterns: default_id_name_patterns(),
            id_plausible_max: 1e12,
            datetime_parse_threshold: 1.0,
            numeric_parse_threshold: 1.0,
            categorical_max_unique_count: 20,
            categorical_ratio_threshold: 0.5,
            top_k: 3,
            sample_value_count: 5,
            datetime_formats: default_datetime_formats(),
            sample_seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_uniqueness_threshold(mut self, threshold: f64) -> Self {
        self.id_uniqueness_threshold = threshold;
        self
    }

    pub fn with_id_name_patterns(mut self, patterns: Vec<NamePattern>) -> Self {
        self.id_name_patterns = patterns;
        self
    }

    pub fn with_datetime_parse_threshold(mut self, threshold: f64) -> Self {
        self.datetime_parse_threshold = threshold;
        self
    }

    pub fn with_numeric_parse_threshold(mut self, threshold: f64) -> Self {
        self.numeric_parse_threshold = threshold;
        self
    }

    pub fn with_categorical_max_unique_count(mut self, count: usize) -> Self {
        self.categorical_max_unique_count = count;
        self
    }

    pub fn with_categorical_ratio_threshold(mut self, threshold: f64) -> Self {
        self.categorical_ratio_threshold = threshold;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_sample_value_count(mut self, count: usize) -> Self {
        self.sample_value_count = count;
        self
    }

    pub fn with_datetime_formats(mut self, formats: Vec<String>) -> Self {
        self.datetime_formats = formats;
        self
    }

    pub fn with_sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = Some(seed);
        self
    }

    /// Reject malformed thresholds before any analysis starts.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("id_uniqueness_threshold", self.id_uniqueness_threshold),
            ("datetime_parse_threshold", self.datetime_parse_threshold),
            ("numeric_parse_threshold", self.numeric_parse_threshold),
            (
                "categorical_ratio_threshold",
                self.categorical_ratio_threshold,
            ),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::InvalidConfig(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        if !self.id_plausible_max.is_finite() || self.id_plausible_max <= 0.0 {
            return Err(ProfileError::InvalidConfig(format!(
                "id_plausible_max must be a positive finite number, got {}",
                self.id_plausible_max
            )));
        }
        if self.top_k == 0 {
            return Err(ProfileError::InvalidConfig(
                "top_k must be at least 1".to_string(),
            ));
        }
        if self.sample_value_count == 0 {
            return Err(ProfileError::InvalidConfig(
                "sample_value_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, NamePattern};

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_ratio() {
        let config = Config::new().with_id_uniqueness_threshold(-0.1);
        assert!(config.validate().is_err());

        let config = Config::new().with_datetime_parse_threshold(1.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_top_k() {
        assert!(Config::new().with_top_k(0).validate().is_err());
    }

    #[test]
    fn name_patterns_match_lowercased_names() {
        assert!(NamePattern::Exact("id".to_string()).matches("id"));
        assert!(NamePattern::Suffix("_id".to_string()).matches("user_id"));
        assert!(NamePattern::Prefix("id_".to_string()).matches("id_number"));
        assert!(NamePattern::Contains("uuid".to_string()).matches("session_uuid_v4"));
        assert!(!NamePattern::Exact("id".to_string()).matches("idea"));
    }
}
