//! Show the effective configuration

use anyhow::{Context, Result};

use qa_server::ServiceConfig;

/// Print the merged configuration as TOML, credentials masked
pub fn run_config(config: &ServiceConfig) -> Result<()> {
    let rendered = config
        .to_redacted_toml()
        .context("Failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}
