//! Document retrieval.
//!
//! The loader only needs "give me the bytes of this named document", so
//! that is the whole trait. Implementations: [`HttpFetcher`] for the
//! published catalogue endpoint, [`DirFetcher`] for a local export
//! directory, and [`AnyFetcher`] to pick between them at runtime.

mod dir;
mod http;

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

pub use dir::DirFetcher;
pub use http::HttpFetcher;

/// Errors from retrieving a catalogue document.
///
/// Carries owned strings rather than source errors so results can be
/// cloned to every caller waiting on the same load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered outside 200-299.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },
    /// The request never completed (connection, timeout, body read).
    #[error("request for {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
    /// A local document file is missing.
    #[error("document {name} not found in {dir}")]
    NotFound { name: String, dir: String },
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

/// Async source of named catalogue documents.
pub trait DocumentFetcher: Send + Sync {
    /// Retrieve the raw bytes of `name` (e.g. `layers.json`).
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

impl<F: DocumentFetcher> DocumentFetcher for Arc<F> {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        self.as_ref().fetch(name)
    }
}

/// Runtime choice between the remote endpoint and a local directory,
/// without a trait object.
#[derive(Debug, Clone)]
pub enum AnyFetcher {
    Http(HttpFetcher),
    Directory(DirFetcher),
}

impl DocumentFetcher for AnyFetcher {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        async move {
            match self {
                AnyFetcher::Http(fetcher) => fetcher.fetch(name).await,
                AnyFetcher::Directory(fetcher) => fetcher.fetch(name).await,
            }
        }
    }
}

// =============================================================================
// Test support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use serde_json::{json, Value};

    use super::{DocumentFetcher, FetchError};

    /// In-memory fetcher with scriptable per-document results, a call
    /// counter, and an optional artificial delay for overlap tests.
    pub(crate) struct ScriptedFetcher {
        documents: Mutex<HashMap<String, Result<Vec<u8>, FetchError>>>,
        calls: AtomicUsize,
        delay: Duration,
    }

    impl ScriptedFetcher {
        pub(crate) fn new() -> Self {
            Self {
                documents: Mutex::new(HashMap::new()),
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }

        /// A fetcher seeded with a small, valid three-document catalogue.
        pub(crate) fn seeded() -> Self {
            let fetcher = Self::new();
            fetcher.set_document(
                "layers.json",
                json!([
                    {
                        "name": "Coastal birds",
                        "theme": "Birds",
                        "summary": "Wintering coastal bird concentrations",
                        "availability_index": 32,
                        "improvement_potential": "large",
                        "difficulty": "medium",
                        "satellite_capable": false,
                        "digital_earth_sweden_compatible": false,
                        "parameters": [
                            {"code": "BRDA", "label": "Bird Density Assessment"}
                        ]
                    },
                    {
                        "name": "Marine mammals",
                        "theme": "Marine mammals",
                        "summary": "Combined seal and porpoise distribution",
                        "availability_index": 75,
                        "improvement_potential": "small",
                        "difficulty": "low",
                        "satellite_capable": true,
                        "digital_earth_sweden_compatible": false,
                        "parameters": [
                            {"code": "ABND", "label": "Abundance of biota"}
                        ]
                    }
                ]),
            );
            fetcher.set_document(
                "parameters.json",
                json!({
                    "ABND": {
                        "preferred_label": "Abundance of biota",
                        "availability_index": 55,
                        "occurrence": 2
                    },
                    "BRDA": {
                        "preferred_label": "Bird Density Assessment",
                        "availability_index": 40,
                        "occurrence": 1
                    }
                }),
            );
            fetcher.set_document(
                "datasets.json",
                json!([
                    {
                        "id": 1,
                        "name": "Seabird winter counts",
                        "source": "Lund University",
                        "start_year": 1967,
                        "end_year": "ongoing",
                        "parameter_labels": ["Bird Density Assessment"]
                    },
                    {
                        "id": 2,
                        "name": "Pelagic trawl surveys",
                        "source": "SLU Aqua",
                        "start_year": 1994,
                        "end_year": 2021,
                        "parameter_labels": ["Abundance of biota"]
                    }
                ]),
            );
            fetcher
        }

        pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        pub(crate) fn set_document(&self, name: &str, body: Value) {
            let bytes = serde_json::to_vec(&body).expect("fixture serializes");
            self.documents
                .lock()
                .expect("fetcher lock poisoned")
                .insert(name.to_string(), Ok(bytes));
        }

        pub(crate) fn set_failure(&self, name: &str, error: FetchError) {
            self.documents
                .lock()
                .expect("fetcher lock poisoned")
                .insert(name.to_string(), Err(error));
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DocumentFetcher for ScriptedFetcher {
        fn fetch(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>, FetchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self
                .documents
                .lock()
                .expect("fetcher lock poisoned")
                .get(name)
                .cloned()
                .unwrap_or_else(|| {
                    Err(FetchError::NotFound {
                        name: name.to_string(),
                        dir: "<scripted>".to_string(),
                    })
                });
            let delay = self.delay;
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
        }
    }
}
