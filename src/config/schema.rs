//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Graph output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// Graph output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Include raw documents and pod templates in JSON/YAML output
    #[serde(default = "default_false")]
    pub include_documents: bool,
}

/// Logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_false() -> bool {
    false
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_documents: default_false(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.include_documents);
        assert_eq!(config.logger.level, "debug");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("includeDocuments"));
        assert!(yaml.contains("format: text"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
output:
  format: json
logger:
  level: info
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.include_documents);
        assert_eq!(config.logger.level, "info");
    }
}
