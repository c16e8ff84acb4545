// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TickerError {
    /// drawing surface missing or failed to initialise
    #[error("surface setup failed: {0}")]
    Setup(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("content source failed for row {row}: {reason}")]
    Source { row: usize, reason: String },

    #[error("row index out of range: {0}")]
    RowIndex(usize),

    #[error("logger init failed: {0}")]
    Log(String),
}

impl From<toml::de::Error> for TickerError {
    fn from(e: toml::de::Error) -> Self {
        TickerError::ConfigParse(e.to_string())
    }
}

impl From<serde_json::Error> for TickerError {
    fn from(e: serde_json::Error) -> Self {
        TickerError::ConfigParse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TickerError>;
