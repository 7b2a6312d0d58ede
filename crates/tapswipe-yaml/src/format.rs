//! Supported file formats.

use crate::error::ParseError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Serialization format of a config or trace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// YAML (`.yaml`, `.yml`)
    Yaml,
    /// JSON (`.json`)
    Json,
    /// TOML (`.toml`), configs only
    Toml,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}
