use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to execute profile request")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status code: {0}")]
    Status(StatusCode),
    #[error("Failed to decode profile response")]
    Decode(#[from] serde_json::Error),
    #[error("Gamertag not found for XUID: {0}")]
    NotFound(String),
}
