use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("History endpoint returned {status} for page {page}")]
    FetchError { page: usize, status: StatusCode },

    #[error("Malformed viewing record: missing {field}")]
    MalformedRecord { field: &'static str },

    #[error("Page limit of {limit} reached without an empty page; aborting")]
    PageLimitError { limit: usize },

    #[error("Ingestion cancelled before completion")]
    Cancelled,
}
