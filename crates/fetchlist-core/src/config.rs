use crate::downloader::DEFAULT_MAX_REDIRECTS;
use crate::progress::ProgressMode;
use crate::storage::DEFAULT_TEMP_SUFFIX;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/fetchlist/config.toml`.
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Suffix for in-flight files (`go.zip` is written as `go.zip.tmp`).
    pub temp_suffix: String,
    /// Maximum redirect hops per GET.
    pub max_redirects: u32,
    /// Console progress style: "line", "bar", "log" or "none".
    pub progress: ProgressMode,
    /// Stop a batch at the first failed transfer.
    pub stop_on_first_error: bool,
    /// Delete the temp file of a failed transfer instead of leaving it on disk.
    pub cleanup_temp_on_error: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            temp_suffix: DEFAULT_TEMP_SUFFIX.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            progress: ProgressMode::Line,
            stop_on_first_error: true,
            cleanup_temp_on_error: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchlist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, writing a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FetchConfig> {
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    if cfg.temp_suffix.is_empty() {
        anyhow::bail!("{}: temp_suffix must not be empty", path.display());
    }
    Ok(cfg)
}
