use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::default_algorithm_names;
use crate::resolver::Resolver;

/// Remote checksum fetching (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Seconds to wait for the TCP/TLS connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole checksum download.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/rlc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RlcConfig {
    /// Checksum algorithms in preference order. Unsupported names are skipped with a warning.
    #[serde(default = "default_algorithm_names")]
    pub algorithms: Vec<String>,
    /// Remote checksum settings; built-in defaults when missing.
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Default for RlcConfig {
    fn default() -> Self {
        Self {
            algorithms: default_algorithm_names(),
            remote: RemoteConfig::default(),
        }
    }
}

impl RlcConfig {
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.algorithms.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rlc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RlcConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RlcConfig> {
    if !path.exists() {
        let default_cfg = RlcConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RlcConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
