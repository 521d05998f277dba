use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::assets::AssetSet;

/// Global configuration loaded from `~/.config/sessview/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessviewConfig {
    /// oEmbed endpoint queried for TikTok thumbnails.
    pub oembed_endpoint: String,
    /// Total timeout for one oEmbed request, in seconds.
    pub oembed_timeout_secs: u64,
    /// Connect timeout for one oEmbed request, in seconds.
    pub oembed_connect_timeout_secs: u64,
    /// Number of records resolved concurrently per batch.
    pub batch_size: usize,
    /// Load/save the thumbnail cache under the XDG state dir.
    pub persist_cache: bool,
    /// Optional GraphQL endpoint serving the session list.
    pub graphql_endpoint: Option<String>,
    /// Static icon paths.
    pub assets: AssetSet,
}

impl Default for SessviewConfig {
    fn default() -> Self {
        Self {
            oembed_endpoint: "https://www.tiktok.com/oembed".to_string(),
            oembed_timeout_secs: 5,
            oembed_connect_timeout_secs: 3,
            batch_size: 5,
            persist_cache: true,
            graphql_endpoint: None,
            assets: AssetSet::default(),
        }
    }
}

impl SessviewConfig {
    pub fn oembed_timeout(&self) -> Duration {
        Duration::from_secs(self.oembed_timeout_secs.max(1))
    }

    pub fn oembed_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.oembed_connect_timeout_secs.max(1))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sessview")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SessviewConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SessviewConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SessviewConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
