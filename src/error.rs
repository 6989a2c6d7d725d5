// Error types for the sbwm client.
// Normalizes HTTP failures, key-policy violations, and decode errors.

use thiserror::Error;

use crate::resource::Resource;

#[derive(Error, Debug)]
pub enum SbwmError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0} is read-only (view)")]
    ReadOnly(Resource),

    #[error("missing primary key {key:?} for {resource}")]
    MissingKey {
        resource: Resource,
        key: &'static str,
    },

    #[error("unknown resource: {0}")]
    UnknownResource(String),
}

pub type Result<T> = std::result::Result<T, SbwmError>;
