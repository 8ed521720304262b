//! Error types shared by detection and the browser bindings.

use thiserror::Error;

pub type SupportResult<T> = Result<T, SupportError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupportError {
    /// No browser could be identified from the host environment.
    #[error("Browser detection failed: {0}")]
    Detection(String),

    #[error("Unrecognised log level: {0}")]
    InvalidLevel(String),

    #[error("Blob read failed: {0}")]
    BlobRead(String),

    #[error("No window object available")]
    NoWindow,

    #[error("JavaScript error: {0}")]
    Js(String),
}
