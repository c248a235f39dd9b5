//! Errors raised outside the analysis core: reading documents, writing
//! reports and validating caller input.
//!
//! The analyzers themselves never fail. Empty input and zero denominators are
//! handled by returning zeroed results.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistantReadingError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DistantReadingError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DistantReadingError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DistantReadingError>;
