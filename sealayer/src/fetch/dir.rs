//! Local-directory document retrieval.
//!
//! Reads documents from a filesystem export of the catalogue, which is
//! how the data is produced before publication. A missing file maps to
//! [`FetchError::NotFound`] so the loader treats it exactly like a 404
//! from the endpoint.

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use super::{DocumentFetcher, FetchError};

#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl DocumentFetcher for DirFetcher {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
        let path = self.root.join(name);
        let dir = self.root.clone();
        let name = name.to_string();
        async move {
            debug!(path = %path.display(), "reading catalogue document");
            match tokio::fs::read(&path).await {
                Ok(bytes) => Ok(bytes),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(FetchError::NotFound {
                    name,
                    dir: dir.display().to_string(),
                }),
                Err(e) => Err(FetchError::Io {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }),
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
