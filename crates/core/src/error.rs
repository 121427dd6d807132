//! Error types for modelshift
//!
//! This module defines the error types shared by the workspace crates.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for modelshift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for version parsing, configuration and object handling
#[derive(Debug, Error)]
pub enum Error {
    /// A version string is not valid JSON
    #[error("Malformed version string {input:?}: {source}")]
    MalformedVersion {
        /// The offending input
        input: String,
        /// Underlying decode failure
        #[source]
        source: serde_json::Error,
    },

    /// A `modelVersion` field holds neither a string nor a version record
    #[error("Invalid model version type: expected a string or object, found {0}")]
    InvalidVersionType(String),

    /// A target version decoded to the unknown sentinel
    #[error("Invalid target version: {0}")]
    InvalidTargetVersion(String),

    /// A JSON value that must be an object is something else
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
