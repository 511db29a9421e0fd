//! Error types for the bmi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bmi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Height was zero, negative or not a number
    #[error("Height must be positive (got {0})")]
    InvalidHeight(f64),

    /// Weight or height outside the plausible range for its unit system
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Unit system string that is neither metric nor imperial
    #[error("Unknown unit system: {0} (expected 'metric' or 'imperial')")]
    UnknownUnit(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
