//! The immutable in-memory catalogue snapshot and its lifecycle.
//!
//! A [`Snapshot`] is the unit everything queries against: the three
//! parsed collections, the indexes built over them, the load timestamp
//! and any advisory warnings collected on the way in. Snapshots are
//! never mutated; a reload builds a complete replacement and swaps it in
//! behind an [`Arc`](std::sync::Arc).

mod loader;
mod store;
mod validate;

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};

use crate::index::CatalogIndex;
use crate::join::JoinResolver;
use crate::model::{Dataset, Layer, ParameterEntry};
use crate::stats::CatalogSummary;

pub use loader::{LoadError, SnapshotLoader};
pub use store::SnapshotStore;
pub use validate::{validate_documents, CollectionKind, ValidationError, ValidationReport};

#[derive(Debug)]
pub struct Snapshot {
    layers: Vec<Layer>,
    parameters: Vec<ParameterEntry>,
    datasets: Vec<Dataset>,
    index: CatalogIndex,
    loaded_at: DateTime<Utc>,
    warnings: Vec<String>,
}

impl Snapshot {
    /// Build a snapshot from parsed collections: index them, fold
    /// duplicate-name findings into the warning list, stamp the load
    /// time.
    pub(crate) fn assemble(
        layers: Vec<Layer>,
        parameters: Vec<ParameterEntry>,
        datasets: Vec<Dataset>,
        mut warnings: Vec<String>,
    ) -> Self {
        let index = CatalogIndex::build(&layers, &parameters, &datasets);
        for name in index.duplicate_layer_names() {
            warnings.push(format!(
                "duplicate layer name \"{name}\"; kept the first occurrence"
            ));
        }
        Self {
            layers,
            parameters,
            datasets,
            index,
            loaded_at: Utc::now(),
            warnings,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn parameters(&self) -> &[ParameterEntry] {
        &self.parameters
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Advisory findings from validation and indexing, in the order they
    /// were discovered.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Look a layer up by name, case-insensitively. Unknown names are a
    /// plain `None`, never an error.
    pub fn layer_by_name(&self, name: &str) -> Option<&Layer> {
        self.index
            .layer_position(name)
            .and_then(|position| self.layers.get(position))
    }

    /// Look a parameter up by its exact code.
    pub fn parameter_by_code(&self, code: &str) -> Option<&ParameterEntry> {
        self.index
            .parameter_position(code)
            .and_then(|position| self.parameters.get(position))
    }

    /// A join resolver borrowing this snapshot's datasets and index.
    pub fn join_resolver(&self) -> JoinResolver<'_> {
        JoinResolver::new(&self.datasets, &self.index)
    }

    /// Datasets related to a parameter identity; see
    /// [`JoinResolver::resolve`].
    pub fn datasets_for_parameter(&self, code: &str, label: &str) -> Vec<&Dataset> {
        self.join_resolver().resolve(code, label)
    }

    /// Number of distinct datasets whose label list contains any of the
    /// layer's parameter labels verbatim (case-insensitive). List views
    /// show this next to each layer; the full three-pass join stays
    /// per-parameter.
    pub fn related_dataset_count(&self, layer: &Layer) -> usize {
        let mut positions = HashSet::new();
        for reference in &layer.parameters {
            for &position in self.index.dataset_positions_for_label(&reference.label) {
                positions.insert(position);
            }
        }
        positions.len()
    }

    /// Sorted, de-duplicated layer themes. Blank themes are skipped.
    pub fn unique_themes(&self) -> Vec<String> {
        let themes: BTreeSet<String> = self
            .layers
            .iter()
            .filter(|layer| !layer.theme.trim().is_empty())
            .map(|layer| layer.theme.clone())
            .collect();
        themes.into_iter().collect()
    }

    /// Summary statistics over this snapshot.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from_layers(&self.layers)
            .with_collection_totals(self.parameters.len(), self.datasets.len())
    }
}

// =============================================================================
// Tests
// =============================================================================
