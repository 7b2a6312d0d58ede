//! Error types for config and trace loading.

use std::path::PathBuf;
use tapswipe_core::GestureError;
use thiserror::Error;

/// Error type for loading configs and traces.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Loaded config failed validation
    #[error("invalid config: {0}")]
    Config(#[from] GestureError),

    /// File extension not recognized
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Trace content is inconsistent
    #[error("invalid trace: {0}")]
    InvalidTrace(String),
}
