//! manifest-grapher - relationship graphs for Kubernetes manifest bundles
//!
//! Reads rendered manifests (e.g. `helm template` output), synthesizes the Pods
//! controllers would create, and links selectors to the Pods they match.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use manifest_grapher::config::ConfigLoader;

/// manifest-grapher - relationship graphs for Kubernetes manifest bundles
#[derive(Parser, Debug)]
#[command(name = "manifest-grapher")]
#[command(about = "Builds ownership and label-selector graphs from Kubernetes manifests", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Build and print the relationship graph of manifest files
    Graph(cli::GraphArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: cli::ConfigSubcommand,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Only graph building needs config and logging
    let graph_args = match args.command {
        Command::Config { subcommand } => return cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            return Ok(());
        }
        Command::Graph(graph_args) => graph_args,
    };

    let config = ConfigLoader::load().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid configuration: {:#}", e);
        ConfigLoader::load_defaults()
    });

    let log_file = cli::init_logging(args.debug, &config.logger.level)?;

    // Print log file location to stderr so it doesn't mix with graph output
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    cli::handle_graph_command(graph_args, &config)
}
