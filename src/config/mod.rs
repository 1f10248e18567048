//! Configuration system for manifest-grapher
//!
//! A single YAML file under the user config directory, layered over built-in
//! defaults and overridden by environment variables.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, LoggerConfig, OutputConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "output.format" => Ok(config.output.format.to_string()),
        "output.includeDocuments" => Ok(config.output.include_documents.to_string()),
        "logger.level" => Ok(config.logger.level.clone()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "output.format" => {
            config.output.format = value
                .parse()
                .map_err(|e| anyhow::anyhow!("{}", e))
                .context("output.format must be 'text', 'json' or 'yaml'")?;
        }
        "output.includeDocuments" => {
            config.output.include_documents = value
                .parse()
                .context("output.includeDocuments must be 'true' or 'false'")?;
        }
        "logger.level" => {
            if value.trim().is_empty() {
                return Err(anyhow::anyhow!("logger.level must not be empty"));
            }
            config.logger.level = value.to_string();
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
