//! Resolution of file paths and stock settings.
//!
//! Precedence for each path: CLI flag (or its env var) > config file >
//! XDG data-dir default. A missing config file is not an error.

use std::path::PathBuf;

use inventory_core::ZeroStockPolicy;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, default_log_path, read_config};

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub low_threshold: u64,
    pub zero_policy: ZeroStockPolicy,
}

/// Resolve the config file path, checking INVENTORY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("INVENTORY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve all settings for `cli`.
pub fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        Some(read_config(&config_path)?)
    } else {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        None
    };

    let data_path = match (&cli.data, &config) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(config)) => PathBuf::from(&config.inventory.data_path),
        (None, None) => default_data_path()?,
    };
    let log_path = match (&cli.log_file, &config) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(config)) => PathBuf::from(&config.inventory.log_path),
        (None, None) => default_log_path()?,
    };
    let (low_threshold, zero_policy) = config
        .as_ref()
        .map(|c| (c.stock.low_threshold, c.stock.zero_policy))
        .unwrap_or((inventory_core::DEFAULT_LOW_THRESHOLD, ZeroStockPolicy::default()));

    Ok(Settings {
        data_path,
        log_path,
        low_threshold,
        zero_policy,
    })
}
