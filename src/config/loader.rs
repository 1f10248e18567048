//! Configuration loading and layering
//!
//! Handles loading configuration from the root file and applying environment
//! overrides on top of built-in defaults.

use super::{defaults, paths, schema::Config};
use crate::render::OutputFormat;
use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable overriding `output.format`
pub const ENV_OUTPUT: &str = "MANIFEST_GRAPHER_OUTPUT";
/// Environment variable overriding `logger.level`
pub const ENV_LOG_LEVEL: &str = "MANIFEST_GRAPHER_LOG_LEVEL";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let root_path = paths::root_config_path();
        let config = if root_path.exists() {
            Self::load_file(&root_path)?
        } else {
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is valid and means "all defaults"
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the root config file, failing on syntax errors or invalid values
    pub fn validate() -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            Self::load_file(&root_path)?;
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(format) = lookup(ENV_OUTPUT) {
            match format.parse::<OutputFormat>() {
                Ok(format) => config.output.format = format,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_OUTPUT, e),
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logger.level = level;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
