//! `sessview cache` – list the persisted thumbnail cache.

use anyhow::Result;
use sessview_core::cache::ThumbnailCache;

pub fn run_cache() -> Result<()> {
    let path = ThumbnailCache::default_path()?;
    let cache = ThumbnailCache::load_from_path(&path)?.unwrap_or_default();
    if cache.is_empty() {
        println!("Thumbnail cache is empty ({}).", path.display());
        return Ok(());
    }
    for (source, image) in cache.entries() {
        println!("{}\n  -> {}", source, image);
    }
    println!("{} entries in {}", cache.len(), path.display());
    Ok(())
}
