//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Server returned {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not enough vocabulary items: need {needed}, got {available}")]
    NotEnoughWords { needed: usize, available: usize },

    #[error("Invalid level: {0}")]
    InvalidLevel(String),
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Http(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
