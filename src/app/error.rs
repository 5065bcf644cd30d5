use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Extraction miss: {0}")]
    ExtractionMiss(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NewsError>;
