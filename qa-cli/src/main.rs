//! qa CLI - run and administer the Q&A service
//!
//! - `serve`: HTTP API for questions and answers
//! - `migrate`: create or update the database schema
//! - `config`: show the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use qa_server::config::load_dotenv;
use qa_server::ServiceConfig;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qa",
    author,
    version,
    about = "Questions and answers over HTTP, backed by PostgreSQL"
)]
struct Cli {
    /// Config file (default: ./qa-service.toml if present)
    #[arg(long = "config", global = true, env = "QA_CONFIG", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Create or update the database schema
    Migrate(commands::MigrateArgs),
    /// Print the effective configuration (password redacted)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before config loading so .env values feed the environment layer
    let env_files = load_dotenv();
    let cli = Cli::parse();

    let mut config = ServiceConfig::load(cli.config_path.as_deref())
        .context("Failed to load configuration")?;
    if cli.debug {
        config.debug = true;
    }
    match &cli.command {
        Commands::Serve(args) => args.apply(&mut config),
        Commands::Migrate(args) => args.db.apply(&mut config),
        Commands::Config => {}
    }

    let _log_guard = tracing_setup::init(&TracingConfig {
        debug: config.debug,
        log_dir: config.log_dir.clone(),
    })?;
    for path in &env_files {
        debug!("Loaded environment from {}", path.display());
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Serve(_) => commands::run_serve(config).await?,
        Commands::Migrate(_) => commands::run_migrate(&config).await?,
        Commands::Config => commands::run_config(&config)?,
    }
    Ok(())
}
