//! Tracing setup for the qa CLI
//!
//! Usage:
//!   qa --debug serve              # Debug logging to console
//!   RUST_LOG=qa_server=debug qa   # Fine-grained log control
//!   LOG_DIR=/var/log/qa qa serve  # Also write daily-rotated log files
//!
//! Environment variables:
//!   RUST_LOG                      # Log filter (default: info)
//!
//! With a log directory, two files rotate daily:
//!   qa-service.<date>.log  everything the filter lets through, 30 files kept
//!   errors.<date>.log      ERROR only, 60 files kept

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// A daily-rotated log file and how many past days to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFile {
    pub prefix: &'static str,
    pub max_files: usize,
}

pub const MAIN_LOG: LogFile = LogFile {
    prefix: "qa-service",
    max_files: 30,
};

pub const ERROR_LOG: LogFile = LogFile {
    prefix: "errors",
    max_files: 60,
};

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Directory for daily-rotated log files; ignored in debug mode
    pub log_dir: Option<PathBuf>,
}

impl TracingConfig {
    fn file_dir(&self) -> Option<&PathBuf> {
        if self.debug {
            None
        } else {
            self.log_dir.as_ref()
        }
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn rolling_file(dir: &Path, file: LogFile) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file.prefix)
        .filename_suffix("log")
        .max_log_files(file.max_files)
        .build(dir)
        .with_context(|| format!("Failed to open {} log in {}", file.prefix, dir.display()))
}

fn file_writer(dir: &Path, file: LogFile) -> Result<(NonBlocking, WorkerGuard)> {
    Ok(tracing_appender::non_blocking(rolling_file(dir, file)?))
}

/// Initialize console logging, plus the rolling log files when configured.
///
/// The returned guards flush the file writers on drop, so hold them until exit.
pub fn init(config: &TracingConfig) -> Result<Vec<WorkerGuard>> {
    // stdout is reserved for command output
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.debug) // Show targets in debug mode
        .compact();

    let mut guards = Vec::new();
    let mut main_file = None;
    let mut error_file = None;
    if let Some(dir) = config.file_dir() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let (main_writer, main_guard) = file_writer(dir, MAIN_LOG)?;
        let (error_writer, error_guard) = file_writer(dir, ERROR_LOG)?;
        guards.push(main_guard);
        guards.push(error_guard);

        main_file = Some(
            tracing_subscriber::fmt::layer()
                .with_writer(main_writer)
                .with_ansi(false),
        );
        error_file = Some(
            tracing_subscriber::fmt::layer()
                .with_writer(error_writer)
                .with_ansi(false)
                .with_filter(LevelFilter::ERROR),
        );
    }

    tracing_subscriber::registry()
        .with(env_filter(config.debug))
        .with(console)
        .with(main_file)
        .with(error_file)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if let Some(dir) = config.file_dir() {
        tracing::info!("Logging to {}", dir.display());
    }

    Ok(guards)
}
