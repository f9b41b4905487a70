//! Dataset Variants CLI application
//!
//! Command-line interface for listing the dataset configurations and
//! versions materialized in local data directories.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use dataset_variants::cli::{
    handle_config, handle_find, handle_list, handle_scan, Cli, Commands,
};
use dataset_variants::config::AppConfig;
use dataset_variants::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        debug!("Failed with {} error", e.category());
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();

    // Config is loaded before logging so its level can act as the default
    let config = AppConfig::load(cli.global.config.clone()).await?;
    init_logging(&cli, &config);

    info!("Dataset Variants v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::List(args) => {
            info!("Executing list command");
            handle_list(args, &config).await
        }
        Commands::Scan(args) => {
            info!("Executing scan command");
            handle_scan(args, &config).await
        }
        Commands::Find(args) => {
            info!("Executing find command");
            handle_find(args, &config).await
        }
        Commands::Config(args) => {
            info!("Executing config command");
            handle_config(args, cli.global.config, &config).await
        }
    }
}

/// Initialize logging from CLI verbosity, falling back to the configured level
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli
        .log_level()
        .map(|level| level.to_string().to_lowercase())
        .unwrap_or_else(|| config.logging.level.to_lowercase());

    let filter = EnvFilter::from_default_env().add_directive(
        format!("dataset_variants={}", log_level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into()),
    );

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
