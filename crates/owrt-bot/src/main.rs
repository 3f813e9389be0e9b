//! Main entry point for OWRT Bot

use anyhow::Context;
use clap::Parser;
use owrt_bot::OwrtBot;
use owrt_commands::{Router, ShellRunner};
use owrt_common::{init_logging, LogFormat, LoggingConfig};
use owrt_config::ConfigLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level filter; RUST_LOG takes precedence when set
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log output format: pretty, compact or json
    #[arg(long, default_value = "compact")]
    log_format: LogFormat,

    /// Dotenv file to load instead of searching for .env
    #[arg(short, long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load the env file first so RUST_LOG from it applies to logging.
    let dotenv = ConfigLoader::load_dotenv(args.env_file.as_deref());

    init_logging(&LoggingConfig {
        level: args.log_level,
        format: args.log_format,
        ..LoggingConfig::default()
    })?;

    match dotenv? {
        Some(path) => info!(path = %path.display(), "Loaded environment file"),
        None => debug!("No .env file found"),
    }

    info!(version = env!("CARGO_PKG_VERSION"), "Starting OWRT Bot");

    let config = Arc::new(ConfigLoader::load().context("failed to load configuration")?);
    let runner = ShellRunner::from_config(&config.execution);
    let router = Router::new(Arc::clone(&config), Arc::new(runner));

    let bot = OwrtBot::new(config, router);
    if let Err(e) = bot.start().await {
        error!("Bot stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}
