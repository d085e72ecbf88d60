//! Error types for cabbook

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
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

    #[error("Unknown booking field: {0}")]
    UnknownField(String),

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    #[error("Required field is empty: {0}")]
    MissingRequired(String),

    #[error("Passenger count {0} is outside {1}-{2}")]
    PassengersOutOfRange(u32, u32, u32),

    #[error("Booking request already submitted")]
    AlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, Error>;
