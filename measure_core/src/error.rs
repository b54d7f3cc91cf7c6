//! Error types for the measure_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for measure_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Semantically invalid construction (bad converter factor, bad alternate parent)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero exponent, exponent overflow or a decimal conversion that cannot complete
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Converter chain cannot be derived for the requested unit
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Units with different dimensions
    #[error("Cannot convert from {from} to {to}: incompatible dimensions")]
    IncompatibleUnits { from: String, to: String },

    /// Symbol not known to a system of units
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Quantity kind not registered
    #[error("Unknown quantity kind: {0}")]
    UnknownQuantity(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn arithmetic(msg: impl Into<String>) -> Self {
        Error::Arithmetic(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
