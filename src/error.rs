use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the homepage episodes from the API
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch episodes from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Malformed episode payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Failed to parse date '{date_str}': {reason}")]
    InvalidDate { date_str: String, reason: String },
}

/// Errors that can occur when writing the generated page to disk
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} into place: {source}")]
    RenameFailed {
        from: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize page props: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Top-level errors for a single page regeneration
#[derive(Error, Debug)]
pub enum RegenerateError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to render page: {0}")]
    Render(#[source] serde_json::Error),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}
