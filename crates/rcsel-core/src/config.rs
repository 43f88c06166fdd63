//! Plugin configuration: the stored remote choice and the catalog endpoints.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_catalog_url() -> String {
    "https://api.github.com/repos/oe-mirrors/branding-module/contents/BoxBranding/remotes"
        .to_string()
}

fn default_download_url() -> String {
    "https://raw.githubusercontent.com/oe-mirrors/branding-module/master/BoxBranding/remotes"
        .to_string()
}

/// Configuration stored at `~/.config/rcsel/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcselConfig {
    /// Chosen remote variant. Empty string = use the device default.
    #[serde(default)]
    pub remote: String,
    /// Endpoint returning the JSON listing of available variants.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Base URL the per-variant files are downloaded from.
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

impl Default for RcselConfig {
    fn default() -> Self {
        Self {
            remote: String::new(),
            catalog_url: default_catalog_url(),
            download_url: default_download_url(),
        }
    }
}

impl RcselConfig {
    /// True when no override is stored and the device default applies.
    pub fn is_default_choice(&self) -> bool {
        self.remote.is_empty()
    }

    /// Direct-download URL for one of a variant's files.
    pub fn asset_url(&self, variant: &str, file: &str) -> String {
        format!(
            "{}/{}/{}",
            self.download_url.trim_end_matches('/'),
            variant,
            file
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str(&data)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rcsel")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RcselConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RcselConfig::default();
        default_cfg.save_to(&path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    RcselConfig::load_from(&path)
}
