//! Persist the thumbnail cache to disk (JSON under XDG state dir) so lookups survive across runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ThumbnailCache;

/// Snapshot of ThumbnailCache for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedCache {
    #[serde(default = "default_version")]
    pub version: u8,
    pub entries: BTreeMap<String, String>,
}

fn default_version() -> u8 {
    1
}

impl ThumbnailCache {
    /// Default path for the cache file: `~/.local/state/sessview/thumbnail_cache.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("sessview")?;
        Ok(xdg_dirs.place_state_file("thumbnail_cache.json")?)
    }

    /// Build a serializable snapshot.
    pub fn to_snapshot(&self) -> PersistedCache {
        PersistedCache {
            version: 1,
            entries: self.entries().into_iter().collect(),
        }
    }

    /// Restore a cache from a snapshot.
    pub fn from_snapshot(snapshot: PersistedCache) -> Self {
        Self::from_map(snapshot.entries.into_iter().collect())
    }

    /// Save the cache to the given path (creates parent dir if needed).
    ///
    /// Entries already on disk are kept, so two views saving in turn never
    /// drop each other's entries.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let mut snapshot = self.to_snapshot();
        if let Some(existing) = Self::load_from_path(path).ok().flatten() {
            for (k, v) in existing.entries() {
                snapshot.entries.entry(k).or_insert(v);
            }
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&snapshot).context("serialize thumbnail cache")?;
        std::fs::write(path, json)
            .with_context(|| format!("write thumbnail cache: {}", path.display()))?;
        Ok(())
    }

    /// Load the cache from the given path. If the file is missing, returns None
    /// (caller can fall back to an empty cache).
    pub fn load_from_path(path: &Path) -> Result<Option<ThumbnailCache>> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read thumbnail cache: {}", path.display()))
            }
        };
        let snapshot: PersistedCache = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse thumbnail cache: {}", path.display()))?;
        Ok(Some(ThumbnailCache::from_snapshot(snapshot)))
    }
}
