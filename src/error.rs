//! Error types for the Cascade translation backend.
//!
//! This module provides structured error handling with semantic exit codes
//! for the `cascade` CLI.

use std::io;
use thiserror::Error;

use crate::options::ResolveOptions;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No translation was resolvable through any tier or default chain.
    ///
    /// Raised only for scoped lookups; unscoped misses degrade to echoing
    /// the original key instead.
    #[error("translation missing: {locale}.{key}")]
    MissingTranslation {
        /// Code of the locale the lookup ran under.
        locale: String,
        /// The scope-qualified key that missed.
        key: String,
        /// The options the failing call was made with.
        options: Box<ResolveOptions>,
    },

    /// A tier store (cache or persistent) reported a failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error (invalid config file, missing required values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A translation bundle could not be parsed or has an invalid shape.
    #[error("Invalid bundle: {0}")]
    Bundle(String),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error (file operations).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the exit code for this error type.
    ///
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 5: Translation not found (scoped miss)
    /// - 10: Store/IO failure
    pub fn exit_code(&self) -> i32 {
        match self {
            // Argument/config errors
            Error::Config(_) => 2,
            Error::InvalidArgument(_) => 2,
            Error::Bundle(_) => 2,

            // Not found
            Error::MissingTranslation { .. } => 5,

            // Store/IO failures
            Error::Store(_) => 10,
            Error::Io(_) => 10,

            // Serialization
            Error::Json(_) => 1,
            Error::Yaml(_) => 1,

            // Fallback
            Error::Other(_) => 1,
        }
    }

    /// Build the scoped-miss error for a failed lookup.
    pub fn missing_translation(
        locale: impl Into<String>,
        key: impl Into<String>,
        options: &ResolveOptions,
    ) -> Self {
        Error::MissingTranslation {
            locale: locale.into(),
            key: key.into(),
            options: Box::new(options.clone()),
        }
    }

    /// Create a store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a bundle error.
    pub fn bundle(msg: impl Into<String>) -> Self {
        Error::Bundle(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
