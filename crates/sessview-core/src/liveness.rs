//! View liveness: a shared token that in-flight work checks before writing.
//!
//! A view creates one token when it starts resolving and disposes it when
//! it is torn down. Writes go through [`ViewLiveness::run_if_alive`], which
//! holds the token's read lock for the whole write; `dispose` takes the
//! write lock, so once it returns no write is running and none will start.

use std::sync::{Arc, RwLock};

/// Cloneable liveness token; all clones observe the same state.
#[derive(Debug, Clone)]
pub struct ViewLiveness {
    alive: Arc<RwLock<bool>>,
}

impl Default for ViewLiveness {
    fn default() -> Self {
        Self {
            alive: Arc::new(RwLock::new(true)),
        }
    }
}

impl ViewLiveness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        *self.alive.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs `write` only if the view is alive, with disposal held off until it returns.
    pub fn run_if_alive<R>(&self, write: impl FnOnce() -> R) -> Option<R> {
        let alive = self.alive.read().unwrap_or_else(|e| e.into_inner());
        if *alive {
            Some(write())
        } else {
            None
        }
    }

    /// Marks the view as gone. Waits for writes already in progress. Irreversible.
    pub fn dispose(&self) {
        *self.alive.write().unwrap_or_else(|e| e.into_inner()) = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    #[test]
    fn clones_share_state() {
        let live = ViewLiveness::new();
        let other = live.clone();
        assert!(other.is_alive());
        live.dispose();
        assert!(!other.is_alive());
    }

    #[test]
    fn no_writes_after_dispose() {
        let live = ViewLiveness::new();
        assert_eq!(live.run_if_alive(|| 1), Some(1));
        live.dispose();
        assert_eq!(live.run_if_alive(|| 2), None);
    }

    #[test]
    fn dispose_waits_for_running_write() {
        let live = ViewLiveness::new();
        let started = Arc::new(AtomicBool::new(false));
        let writes = Arc::new(AtomicUsize::new(0));

        let writer = {
            let live = live.clone();
            let started = Arc::clone(&started);
            let writes = Arc::clone(&writes);
            std::thread::spawn(move || {
                live.run_if_alive(|| {
                    started.store(true, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(100));
                    writes.fetch_add(1, Ordering::SeqCst);
                })
            })
        };

        while !started.load(Ordering::SeqCst) {
            std::thread::yield_now();
        }
        live.dispose();
        // The write that began before dispose has completed; nothing lands after.
        assert_eq!(writes.load(Ordering::SeqCst), 1);
        assert!(writer.join().unwrap().is_some());
        assert_eq!(live.run_if_alive(|| writes.fetch_add(1, Ordering::SeqCst)), None);
        assert_eq!(writes.load(Ordering::SeqCst), 1);
    }
}
