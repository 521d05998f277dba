//! CLI command handlers. Each command is in its own file.

mod cache;
mod classify;
mod resolve;
mod sessions;
mod title;

pub use cache::run_cache;
pub use classify::run_classify;
pub use resolve::run_resolve;
pub use sessions::run_sessions;
pub use title::run_title;

use sessview_core::cache::ThumbnailCache;
use sessview_core::config::SessviewConfig;

/// Persisted cache if enabled and readable, else an empty one.
pub(crate) fn open_cache(cfg: &SessviewConfig) -> ThumbnailCache {
    if !cfg.persist_cache {
        return ThumbnailCache::new();
    }
    match ThumbnailCache::default_path().and_then(|p| ThumbnailCache::load_from_path(&p)) {
        Ok(Some(cache)) => {
            tracing::debug!(entries = cache.len(), "loaded thumbnail cache from state file");
            cache
        }
        Ok(None) => ThumbnailCache::new(),
        Err(e) => {
            tracing::warn!("ignoring unreadable thumbnail cache: {:#}", e);
            ThumbnailCache::new()
        }
    }
}

/// Save the cache back if persistence is enabled. Failures are logged only.
pub(crate) fn save_cache(cfg: &SessviewConfig, cache: &ThumbnailCache) {
    if !cfg.persist_cache || cache.is_empty() {
        return;
    }
    if let Ok(path) = ThumbnailCache::default_path() {
        if let Err(e) = cache.save_to_path(&path) {
            tracing::warn!("could not save thumbnail cache to {}: {:#}", path.display(), e);
        }
    }
}
