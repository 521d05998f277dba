//! Thumbnail cache.
//!
//! Maps a source URL (exact string) to the image URL it resolved to. The
//! cache is owned by the view that created it and handed to the resolver;
//! entries are never replaced or invalidated while it lives. The persisted
//! form (see [`persist`]) grows the same way: no TTL, no eviction.

mod persist;

pub use persist::PersistedCache;

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Append-only map of source URL -> resolved image URL.
///
/// Interior locking lets concurrent resolutions share one cache through a
/// plain reference or an `Arc`.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Cached image URL for `source_url`, if any.
    pub fn get(&self, source_url: &str) -> Option<String> {
        self.read().get(source_url).cloned()
    }

    /// Stores `image_url` for `source_url` unless an entry already exists.
    /// Returns the entry that is in the cache afterwards.
    pub fn insert(&self, source_url: &str, image_url: &str) -> String {
        self.write()
            .entry(source_url.to_string())
            .or_insert_with(|| image_url.to_string())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy of all entries, sorted by source URL.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }
}
