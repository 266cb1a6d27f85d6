use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvLensError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{operation}: network error: {source}")]
    Network {
        operation: &'static str,
        source: reqwest::Error,
    },

    #[error("{operation}: provider returned {status}")]
    Protocol {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{operation}: unexpected response shape: {source}")]
    Parse {
        operation: &'static str,
        source: reqwest::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvLensError>;
