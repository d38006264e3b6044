//! Error types for breathscan.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreathScanError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("Connection error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Server error: {0}")]
    Status(u16),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A browser API (Blob, FormData, DOM) refused an operation.
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("{0}")]
    Other(String),
}

impl BreathScanError {
    /// Status code carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BreathScanError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BreathScanError {
    fn from(e: serde_json::Error) -> Self {
        BreathScanError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BreathScanError>;
