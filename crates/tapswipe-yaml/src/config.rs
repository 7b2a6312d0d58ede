//! Loading and writing [`GestureConfig`].

use crate::error::ParseError;
use crate::format::Format;
use std::fs;
use std::path::Path;
use tapswipe_core::GestureConfig;
use tracing::debug;

/// Parse and validate a config from text.
pub fn parse_config(text: &str, format: Format) -> Result<GestureConfig, ParseError> {
    let config: GestureConfig = match format {
        Format::Yaml => serde_yaml_ng::from_str(text)?,
        Format::Json => serde_json::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file, picking the format from its extension.
pub fn load_config(path: &Path) -> Result<GestureConfig, ParseError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text, format)?;
    debug!(path = %path.display(), ?config, "loaded gesture config");
    Ok(config)
}

/// Serialize a config.
pub fn config_to_string(config: &GestureConfig, format: Format) -> Result<String, ParseError> {
    Ok(match format {
        Format::Yaml => serde_yaml_ng::to_string(config)?,
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r"
long_tap_threshold_secs: 0.25
swipe_threshold_distance: 18.0
";
        let config = parse_config(yaml, Format::Yaml).unwrap();
        assert_eq!(config.long_tap_threshold_secs, 0.25);
        assert_eq!(config.swipe_threshold_distance, 18.0);
        assert_eq!(config.poll_interval_ms, 50);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = "swipe_threshold_distance = 12.5\npoll_interval_ms = 16\n";
        let config = parse_config(toml, Format::Toml).unwrap();
        assert_eq!(config.swipe_threshold_distance, 12.5);
        assert_eq!(config.poll_interval_ms, 16);
    }

    #[test]
    fn test_parse_json_config() {
        let config = parse_config(r#"{"long_tap_threshold_secs": 1.5}"#, Format::Json).unwrap();
        assert_eq!(config.long_tap_threshold_secs, 1.5);
    }

    #[test]
    fn test_parse_empty_yaml_mapping_is_default() {
        let config = parse_config("{}", Format::Yaml).unwrap();
        assert_eq!(config, GestureConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid_thresholds() {
        let result = parse_config("swipe_threshold_distance: -3.0", Format::Yaml);
        assert!(matches!(result, Err(ParseError::Config(_))));

        let result = parse_config("poll_interval_ms = 0", Format::Toml);
        assert!(matches!(result, Err(ParseError::Config(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let result = parse_config("double_tap_ms: 300", Format::Yaml);
        assert!(matches!(result, Err(ParseError::Yaml(_))));
    }

    #[test]
    fn test_config_to_string_and_back() {
        let config = GestureConfig {
            long_tap_threshold_secs: 0.75,
            swipe_threshold_distance: 22.0,
            poll_interval_ms: 25,
        };
        for format in [Format::Yaml, Format::Json, Format::Toml] {
            let text = config_to_string(&config, format).unwrap();
            assert_eq!(parse_config(&text, format).unwrap(), config, "{format}");
        }
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/tapswipe.yaml"));
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
