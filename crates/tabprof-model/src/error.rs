use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("malformed report: {0}")]
    MalformedReport(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
