use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvlistError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid listing: {0}")]
    Listing(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for EvlistError {
    fn from(err: config::ConfigError) -> Self {
        EvlistError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvlistError>;
