//! Unified error types for wordpack.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while converting a word list.
#[derive(Error, Debug)]
pub enum WordpackError {
    // --- Input ---

    /// The input word list does not exist or could not be read.
    #[error("failed to read input file {path}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input word list is not valid UTF-8.
    #[error("input file {path} is not valid UTF-8")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    // --- Output ---

    /// The generated module could not be written (permissions, disk full, missing directory).
    #[error("failed to write output file {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Configuration ---

    /// The configuration file (`wordpack.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The options could not be serialized to JSON (e.g., a path that is not valid UTF-8).
    #[error("failed to serialize config for {path}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write config file {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A constant or global object name that JavaScript would reject.
    #[error("invalid JavaScript identifier for {field}: '{value}'")]
    InvalidIdentifier { field: &'static str, value: String },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

/// Alias for `Result<T, WordpackError>`.
pub type Result<T> = std::result::Result<T, WordpackError>;
