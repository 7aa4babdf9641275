//! Single-flight snapshot cache.
//!
//! The store owns the one current [`Snapshot`] for the session.
//! Concurrent first-time callers collapse into a single in-flight load:
//! one caller leads and runs the loader, the rest subscribe to a
//! broadcast of its result. A successful load is cached until an
//! explicit reload replaces it atomically; a failed load caches nothing,
//! so the next caller simply tries again.

use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::broadcast;
use tracing::debug;

use crate::fetch::DocumentFetcher;

use super::loader::{LoadError, SnapshotLoader};
use super::Snapshot;

type LoadResult = Result<Arc<Snapshot>, LoadError>;

enum Ticket {
    Lead(broadcast::Sender<LoadResult>),
    Follow(broadcast::Receiver<LoadResult>),
}

pub struct SnapshotStore<F: DocumentFetcher> {
    loader: SnapshotLoader<F>,
    current: RwLock<Option<Arc<Snapshot>>>,
    in_flight: Mutex<Option<broadcast::Sender<LoadResult>>>,
}

impl<F: DocumentFetcher> SnapshotStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            loader: SnapshotLoader::new(fetcher),
            current: RwLock::new(None),
            in_flight: Mutex::new(None),
        }
    }

    /// Whether a snapshot is cached and queries can be answered.
    pub fn ready(&self) -> bool {
        self.cached().is_some()
    }

    /// The cached snapshot, if any, without triggering a load.
    pub fn cached(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .expect("snapshot lock poisoned")
            .clone()
    }

    /// The current snapshot, loading it on first use. Concurrent callers
    /// share one load.
    pub async fn snapshot(&self) -> LoadResult {
        if let Some(snapshot) = self.cached() {
            return Ok(snapshot);
        }
        self.load(false).await
    }

    /// Fetch a fresh snapshot and replace the cached one atomically on
    /// success. On failure the previous snapshot stays in place and the
    /// error goes to the caller. A reload issued while a load is already
    /// in flight joins that flight instead of stacking another.
    pub async fn reload(&self) -> LoadResult {
        self.load(true).await
    }

    async fn load(&self, force: bool) -> LoadResult {
        let ticket = {
            let mut in_flight = self.in_flight.lock().expect("in-flight lock poisoned");
            // Re-check under the lock: a load may have finished between
            // the caller's cache miss and here.
            if !force {
                if let Some(snapshot) = self.cached() {
                    return Ok(snapshot);
                }
            }
            match in_flight.as_ref() {
                Some(sender) => Ticket::Follow(sender.subscribe()),
                None => {
                    // Capacity 1: exactly one result is sent per flight.
                    let (sender, _) = broadcast::channel(1);
                    *in_flight = Some(sender.clone());
                    Ticket::Lead(sender)
                }
            }
        };

        match ticket {
            Ticket::Follow(mut receiver) => {
                debug!("joining catalogue load already in flight");
                receiver.recv().await.unwrap_or(Err(LoadError::Interrupted))
            }
            Ticket::Lead(sender) => {
                let result = self.loader.load().await.map(Arc::new);
                if let Ok(snapshot) = &result {
                    *self.current.write().expect("snapshot lock poisoned") =
                        Some(Arc::clone(snapshot));
                }
                *self.in_flight.lock().expect("in-flight lock poisoned") = None;
                // Send fails only when no follower subscribed.
                let _ = sender.send(result.clone());
                result
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::ScriptedFetcher;
    use crate::fetch::FetchError;
    use std::time::Duration;

    use futures::future::join_all;
    use serde_json::json;

    fn failing_datasets(fetcher: &ScriptedFetcher) {
        fetcher.set_failure(
            "datasets.json",
            FetchError::HttpStatus {
                status: 404,
                url: "http://localhost:8000/data/datasets.json".to_string(),
            },
        );
    }

    #[tokio::test]
    async fn test_snapshot_loads_once_and_caches() {
        let fetcher = Arc::new(ScriptedFetcher::seeded());
        let store = SnapshotStore::new(Arc::clone(&fetcher));

        assert!(!store.ready());
        let first = store.snapshot().await.expect("load succeeds");
        assert!(store.ready());
        assert_eq!(fetcher.calls(), 3);

        let second = store.snapshot().await.expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetcher.calls(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_flight() {
        let fetcher = Arc::new(ScriptedFetcher::seeded().with_delay(Duration::from_millis(25)));
        let store = Arc::new(SnapshotStore::new(Arc::clone(&fetcher)));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.snapshot().await })
            })
            .collect();

        let results = join_all(tasks).await;
        let snapshots: Vec<Arc<Snapshot>> = results
            .into_iter()
            .map(|joined| joined.expect("task ran").expect("load succeeded"))
            .collect();

        // One flight: three document fetches total, same Arc everywhere.
        assert_eq!(fetcher.calls(), 3);
        for snapshot in &snapshots[1..] {
            assert!(Arc::ptr_eq(&snapshots[0], snapshot));
        }
    }

    #[tokio::test]
    async fn test_concurrent_callers_all_see_the_same_failure() {
        let fetcher = Arc::new(ScriptedFetcher::seeded().with_delay(Duration::from_millis(25)));
        failing_datasets(&fetcher);
        let store = Arc::new(SnapshotStore::new(Arc::clone(&fetcher)));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.snapshot().await })
            })
            .collect();

        for result in join_all(tasks).await {
            let error = result.expect("task ran").unwrap_err();
            assert!(matches!(error, LoadError::Fetch { .. }), "{error:?}");
        }
        assert_eq!(fetcher.calls(), 3);
        assert!(!store.ready());
    }

    #[tokio::test]
    async fn test_failed_load_caches_nothing_and_retries() {
        let fetcher = Arc::new(ScriptedFetcher::seeded());
        failing_datasets(&fetcher);
        let store = SnapshotStore::new(Arc::clone(&fetcher));

        store.snapshot().await.unwrap_err();
        assert!(!store.ready());

        // Next caller starts a fresh flight once the document is back.
        fetcher.set_document("datasets.json", json!([{"id": 9, "name": "Restored"}]));
        let snapshot = store.snapshot().await.expect("retry succeeds");
        assert_eq!(snapshot.datasets().len(), 1);
        assert_eq!(fetcher.calls(), 6);
    }

    #[tokio::test]
    async fn test_reload_replaces_the_snapshot() {
        let fetcher = Arc::new(ScriptedFetcher::seeded());
        let store = SnapshotStore::new(Arc::clone(&fetcher));

        let before = store.snapshot().await.expect("initial load");
        assert_eq!(before.layers().len(), 2);

        fetcher.set_document(
            "layers.json",
            json!([
                {"name": "Coastal birds"},
                {"name": "Marine mammals"},
                {"name": "Eelgrass meadows"}
            ]),
        );
        let after = store.reload().await.expect("reload");

        assert_eq!(after.layers().len(), 3);
        assert!(!Arc::ptr_eq(&before, &after));
        // Holders of the old Arc keep a consistent view.
        assert_eq!(before.layers().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_the_previous_snapshot() {
        let fetcher = Arc::new(ScriptedFetcher::seeded());
        let store = SnapshotStore::new(Arc::clone(&fetcher));

        let before = store.snapshot().await.expect("initial load");
        failing_datasets(&fetcher);

        store.reload().await.unwrap_err();
        let still = store.cached().expect("previous snapshot retained");
        assert!(Arc::ptr_eq(&before, &still));
        assert!(store.ready());
    }
}
