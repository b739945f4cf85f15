use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid access key")]
    InvalidApiKey,

    #[error("Missing or invalid bearer token")]
    InvalidBearerToken,

    #[error("HTTP error {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Failed to send request")]
    Request(#[source] reqwest::Error),

    #[error("Failed to parse response")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("Failed to read file")]
    Io(#[from] std::io::Error),
}
