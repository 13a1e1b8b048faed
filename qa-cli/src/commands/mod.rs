//! Command implementations for the qa CLI

use clap::Args;
use qa_server::ServiceConfig;

pub mod config;
pub mod migrate;
pub mod serve;

pub use config::run_config;
pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

/// Database connection flags shared by `serve` and `migrate`
#[derive(Args, Debug, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file and environment)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
    }
}
