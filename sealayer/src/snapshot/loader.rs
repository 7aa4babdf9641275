//! One-shot catalogue loading.
//!
//! A load fans out the three document fetches concurrently and is
//! all-or-nothing: any fetch, parse or validation failure aborts the
//! whole attempt and no partial snapshot ever escapes.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::fetch::{DocumentFetcher, FetchError};
use crate::model::{entries_from_map, Dataset, Layer, ParameterEntry};

use super::validate::{validate_documents, CollectionKind, ValidationError};
use super::Snapshot;

/// Why a load attempt failed. Cloneable so one result can be handed to
/// every caller waiting on the same flight.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("failed to fetch the {collection} document: {source}")]
    Fetch {
        collection: CollectionKind,
        #[source]
        source: FetchError,
    },
    #[error("failed to parse the {collection} document: {message}")]
    Parse {
        collection: CollectionKind,
        message: String,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The loading caller went away before producing a result.
    #[error("catalogue load was interrupted")]
    Interrupted,
}

/// Fetches, validates, parses and indexes the three documents into a
/// [`Snapshot`].
pub struct SnapshotLoader<F> {
    fetcher: F,
}

impl<F: DocumentFetcher> SnapshotLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Run one complete load.
    pub async fn load(&self) -> Result<Snapshot, LoadError> {
        let started = Instant::now();

        let (layers_raw, parameters_raw, datasets_raw) = tokio::try_join!(
            self.fetch_document(CollectionKind::Layers),
            self.fetch_document(CollectionKind::Parameters),
            self.fetch_document(CollectionKind::Datasets),
        )?;

        let report = validate_documents(&layers_raw, &parameters_raw, &datasets_raw)?;

        let layers: Vec<Layer> = parse_collection(CollectionKind::Layers, layers_raw)?;
        let parameter_map: BTreeMap<String, ParameterEntry> =
            parse_collection(CollectionKind::Parameters, parameters_raw)?;
        let parameters = entries_from_map(parameter_map);
        let datasets: Vec<Dataset> = parse_collection(CollectionKind::Datasets, datasets_raw)?;

        let snapshot = Snapshot::assemble(layers, parameters, datasets, report.warnings);
        info!(
            layers = snapshot.layers().len(),
            parameters = snapshot.parameters().len(),
            datasets = snapshot.datasets().len(),
            warnings = snapshot.warnings().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalogue snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Fetch one document and parse it as far as raw JSON. Typed parsing
    /// waits until all three documents validated.
    async fn fetch_document(&self, collection: CollectionKind) -> Result<Value, LoadError> {
        let bytes = self
            .fetcher
            .fetch(collection.document_name())
            .await
            .map_err(|source| LoadError::Fetch { collection, source })?;
        serde_json::from_slice(&bytes).map_err(|e| LoadError::Parse {
            collection,
            message: e.to_string(),
        })
    }
}

fn parse_collection<T: DeserializeOwned>(
    collection: CollectionKind,
    value: Value,
) -> Result<T, LoadError> {
    serde_json::from_value(value).map_err(|e| LoadError::Parse {
        collection,
        message: e.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::ScriptedFetcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_assembles_a_queryable_snapshot() {
        let loader = SnapshotLoader::new(ScriptedFetcher::seeded());
        let snapshot = loader.load().await.expect("load succeeds");

        assert_eq!(snapshot.layers().len(), 2);
        assert_eq!(snapshot.parameters().len(), 2);
        assert_eq!(snapshot.datasets().len(), 2);
        assert!(snapshot.layer_by_name("coastal birds").is_some());
        assert!(snapshot.warnings().is_empty());
    }

    #[tokio::test]
    async fn test_failed_document_fails_the_whole_load() {
        let fetcher = ScriptedFetcher::seeded();
        fetcher.set_failure(
            "datasets.json",
            crate::fetch::FetchError::HttpStatus {
                status: 404,
                url: "http://localhost:8000/data/datasets.json".to_string(),
            },
        );

        let loader = SnapshotLoader::new(fetcher);
        let error = loader.load().await.unwrap_err();
        assert!(
            matches!(
                error,
                LoadError::Fetch {
                    collection: CollectionKind::Datasets,
                    ..
                }
            ),
            "{error:?}"
        );
    }

    #[tokio::test]
    async fn test_unparseable_document_fails_the_load() {
        let fetcher = ScriptedFetcher::seeded();
        fetcher.set_document("parameters.json", json!("not an object"));

        let loader = SnapshotLoader::new(fetcher);
        let error = loader.load().await.unwrap_err();
        assert!(
            matches!(
                error,
                LoadError::Parse {
                    collection: CollectionKind::Parameters,
                    ..
                }
            ),
            "{error:?}"
        );
    }

    #[tokio::test]
    async fn test_validation_failure_propagates() {
        let fetcher = ScriptedFetcher::seeded();
        fetcher.set_document("layers.json", json!([]));

        let loader = SnapshotLoader::new(fetcher);
        let error = loader.load().await.unwrap_err();
        assert_eq!(
            error,
            LoadError::Validation(ValidationError::EmptyCollection(CollectionKind::Layers))
        );
    }

    #[tokio::test]
    async fn test_drift_warnings_reach_the_snapshot() {
        let fetcher = ScriptedFetcher::seeded();
        fetcher.set_document("layers.json", json!([{"name": "Sparse", "theme": "Misc"}]));

        let loader = SnapshotLoader::new(fetcher);
        let snapshot = loader.load().await.expect("drift is not fatal");
        assert!(!snapshot.warnings().is_empty());
    }
}
