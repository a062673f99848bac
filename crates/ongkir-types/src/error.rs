//! Error types for ongkir

use thiserror::Error;

/// Input rejected before the pricing engine is invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Weight missing, non-numeric, or not greater than zero
    #[error("Please enter a valid package weight")]
    InvalidWeight,

    /// Any of length/width/height missing, non-numeric, or not greater than zero
    #[error("Please enter valid package dimensions")]
    InvalidDimensions,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Unknown package category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, Error>;
