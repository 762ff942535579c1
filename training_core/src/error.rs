//! Error types for the training_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for training_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code is not present in the dispatch table
    #[error("Unknown workout type '{code}' (known: {})", known.join(", "))]
    UnknownWorkoutType { code: String, known: Vec<String> },

    /// Reading count does not match the variant's declared field count
    #[error("{workout} expects {expected} readings, got {actual}")]
    FieldCountMismatch {
        workout: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A reading cannot be bound to its field
    #[error("{workout}: invalid value {value} for field '{field}'")]
    InvalidReading {
        workout: &'static str,
        field: &'static str,
        value: f64,
    },

    /// Malformed package description (e.g. on the command line)
    #[error("Invalid package '{input}': {reason}")]
    InvalidPackage { input: String, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
