use std::path::{Path, PathBuf};

use inventory_core::{ZeroStockPolicy, DEFAULT_LOW_THRESHOLD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub inventory: PathsSection,
    #[serde(default)]
    pub stock: StockSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PathsSection {
    pub data_path: String,
    pub log_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockSection {
    #[serde(default = "default_low_threshold")]
    pub low_threshold: u64,
    #[serde(default)]
    pub zero_policy: ZeroStockPolicy,
}

impl Default for StockSection {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            zero_policy: ZeroStockPolicy::default(),
        }
    }
}

fn default_low_threshold() -> u64 {
    DEFAULT_LOW_THRESHOLD
}

impl InventoryConfig {
    pub fn new(
        data_path: PathBuf,
        log_path: PathBuf,
        low_threshold: u64,
        zero_policy: ZeroStockPolicy,
    ) -> Self {
        Self {
            inventory: PathsSection {
                data_path: data_path.to_string_lossy().to_string(),
                log_path: log_path.to_string_lossy().to_string(),
            },
            stock: StockSection {
                low_threshold,
                zero_policy,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("stock.json"))
}

pub fn default_log_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("activity.log"))
}

pub fn read_config(path: &Path) -> anyhow::Result<InventoryConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &InventoryConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("inventory"));
        }
    }
    Ok(home_dir()?.join(".config").join("inventory"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("inventory"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("inventory"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
