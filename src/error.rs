use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data source not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the caller should offer an alternate data source.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
