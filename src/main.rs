mod api;
mod config;
mod ddns;
mod error;
mod records;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use config::Config;
use ddns::NetcupDdns;
use std::path::PathBuf;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional YAML config path, otherwise the environment (and .env) is used.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    let ddns = NetcupDdns::new(config);
    ddns.run().await.context("DNS update failed")?;
    Ok(())
}
