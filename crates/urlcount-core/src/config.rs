use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::count::CountConfig;
use crate::normalize::PathMode;

/// Global configuration loaded from `~/.config/urlcount/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlcountConfig {
    /// Path mode for the global unique count ("clean" or "raw").
    #[serde(default = "default_unique_path_mode")]
    pub unique_path_mode: PathMode,
    /// Path mode for the per-domain count. Defaults to "raw", so `/a` and
    /// `/a/` stay distinct per domain; set to "clean" to match the global count.
    #[serde(default = "default_per_domain_path_mode")]
    pub per_domain_path_mode: PathMode,
    /// Number of partitions used when counting (1 = single-threaded).
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

fn default_unique_path_mode() -> PathMode {
    PathMode::Clean
}

fn default_per_domain_path_mode() -> PathMode {
    PathMode::Raw
}

fn default_jobs() -> usize {
    1
}

impl Default for UrlcountConfig {
    fn default() -> Self {
        Self {
            unique_path_mode: default_unique_path_mode(),
            per_domain_path_mode: default_per_domain_path_mode(),
            jobs: default_jobs(),
        }
    }
}

impl UrlcountConfig {
    pub fn count_config(&self) -> CountConfig {
        CountConfig {
            unique_path_mode: self.unique_path_mode,
            per_domain_path_mode: self.per_domain_path_mode,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcount")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcountConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<UrlcountConfig> {
    if !path.exists() {
        let default_cfg = UrlcountConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlcountConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
