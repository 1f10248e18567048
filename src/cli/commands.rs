//! CLI command handlers

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use manifest_grapher::config::{self, Config, ConfigLoader, paths};
use manifest_grapher::render::{self, OutputFormat};
use manifest_grapher::{build_graph, manifest};
use std::path::PathBuf;

/// Arguments for building a graph
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Manifest files to read ("-" for stdin); stdin is read when none are given
    pub files: Vec<PathBuf>,

    /// Output format (defaults to output.format from config)
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<OutputFormat>,

    /// Include raw documents and pod templates in JSON/YAML output
    #[arg(long)]
    pub include_documents: bool,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "output.format", "logger.level")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "output.format", "logger.level")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Load manifests, build the graph and print it
pub fn handle_graph_command(args: GraphArgs, config: &Config) -> Result<()> {
    let files = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    let documents = manifest::load_files(&files[..]).context("Failed to load manifests")?;
    tracing::info!("Loaded {} documents from {} sources", documents.len(), files.len());

    let graph = build_graph(documents).context("Failed to build graph")?;

    let format = args.output.unwrap_or(config.output.format);
    let include_documents = args.include_documents || config.output.include_documents;
    let rendered = render::render(&graph, format, include_documents)?;
    print!("{}", rendered);

    Ok(())
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            // Load config (will use defaults if no file exists)
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                // Print all config as YAML
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Start from the file alone so env overrides are not persisted
            let root_path = paths::root_config_path();
            let mut config = ConfigLoader::load_file(&root_path)
                .unwrap_or_else(|_| ConfigLoader::load_defaults());

            config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
