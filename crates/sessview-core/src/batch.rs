//! Batched resolution of a session list.
//!
//! Records are resolved in fixed-size batches: every member of a batch is in
//! flight at once, and the next batch starts only after the current one has
//! finished. This bounds simultaneous outbound oEmbed requests to the batch
//! size. Results land in a shared [`DisplayState`] keyed by record id; a
//! disposed [`ViewLiveness`] stops both writes and further batches.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cache::ThumbnailCache;
use crate::classify::{classify, Kind};
use crate::liveness::ViewLiveness;
use crate::record::{ContentRecord, ResolvedDisplay};
use crate::resolver::{Resolution, ThumbnailResolver};
use crate::title::normalize_title;

/// Default number of concurrent resolutions per batch.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Display-ready view of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDisplay {
    pub id: String,
    pub title: String,
    pub kind: String,
    #[serde(flatten)]
    pub display: ResolvedDisplay,
    /// Fallback reason, if any; for logs and diagnostics.
    pub fallback_reason: Option<String>,
}

impl SessionDisplay {
    fn new(record: &ContentRecord, kind: &Kind, resolution: &Resolution) -> Self {
        Self {
            id: record.id.clone(),
            title: normalize_title(&record.title),
            kind: kind.to_string(),
            display: resolution.display(),
            fallback_reason: resolution.fallback_reason().map(|r| r.to_string()),
        }
    }
}

/// Shared display state: one entry per record id.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    entries: Arc<Mutex<HashMap<String, SessionDisplay>>>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes an entry; last writer wins.
    fn apply(&self, entry: SessionDisplay) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(entry.id.clone(), entry);
    }

    pub fn get(&self, id: &str) -> Option<SessionDisplay> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries ordered like `records`; ids without an entry are skipped.
    pub fn ordered(&self, records: &[ContentRecord]) -> Vec<SessionDisplay> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let mut seen = std::collections::HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.id.as_str()))
            .filter_map(|r| entries.get(&r.id).cloned())
            .collect()
    }
}

/// Resolves every record in batches of `batch_size`, writing into `state`.
///
/// `state` belongs to the calling view, which keeps reading it while batches
/// land. Returns the number of entries written. Stops early (without error)
/// once `liveness` is disposed; a write is either complete before `dispose`
/// returns or never happens.
pub async fn resolve_batch(
    resolver: &ThumbnailResolver,
    records: &[ContentRecord],
    cache: Arc<ThumbnailCache>,
    batch_size: usize,
    liveness: &ViewLiveness,
    state: &DisplayState,
) -> usize {
    let batch_size = batch_size.max(1);
    let mut written = 0usize;

    for (batch_no, batch) in records.chunks(batch_size).enumerate() {
        if !liveness.is_alive() {
            tracing::debug!(batch_no, "view disposed, not starting batch");
            break;
        }

        let mut join_set = tokio::task::JoinSet::new();
        for record in batch {
            let resolver = resolver.clone();
            let cache = Arc::clone(&cache);
            let liveness = liveness.clone();
            let state = state.clone();
            let record = record.clone();
            join_set.spawn(async move {
                let kind = classify(&record.url);
                let resolution = resolver.resolve_kind(&record.url, &kind, &cache).await;
                let entry = SessionDisplay::new(&record, &kind, &resolution);
                liveness.run_if_alive(|| state.apply(entry)).is_some()
            });
        }

        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("thumbnail task join: {}", e),
            }
        }
        tracing::debug!(batch_no, size = batch.len(), "batch resolved");
    }

    written
}
