//! Lookup indexes built once per snapshot.
//!
//! Three structures, all keyed by strings because that is all the source
//! documents give us: layer name → position, parameter code → position,
//! and normalized dataset label → positions (a multimap; one label is
//! typically measured by several datasets). Positions index into the
//! snapshot's collection vectors, so an index is only meaningful next to
//! the exact collections it was built from.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::warn;

use crate::model::{Dataset, Layer, ParameterEntry};

/// Key normalization for name and label lookups: trim, then lowercase.
/// Unicode-aware because the catalogue is full of Swedish names.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable lookup structures over one snapshot's collections.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    layers_by_name: HashMap<String, usize>,
    parameters_by_code: HashMap<String, usize>,
    datasets_by_label: HashMap<String, Vec<usize>>,
    duplicate_layer_names: Vec<String>,
}

impl CatalogIndex {
    /// Build all three indexes in one pass per collection.
    ///
    /// Layer names are unique case-insensitively; on a collision the first
    /// occurrence wins, the rest are logged and recorded on the index for
    /// the load report. Parameter codes are map keys upstream and cannot
    /// collide. Dataset labels are expected to repeat.
    pub fn build(layers: &[Layer], parameters: &[ParameterEntry], datasets: &[Dataset]) -> Self {
        let mut layers_by_name = HashMap::with_capacity(layers.len());
        let mut duplicate_layer_names = Vec::new();
        for (position, layer) in layers.iter().enumerate() {
            match layers_by_name.entry(normalize(&layer.name)) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => {
                    warn!(
                        layer = %layer.name,
                        "duplicate layer name; keeping the first occurrence"
                    );
                    duplicate_layer_names.push(layer.name.clone());
                }
            }
        }

        let mut parameters_by_code = HashMap::with_capacity(parameters.len());
        for (position, entry) in parameters.iter().enumerate() {
            parameters_by_code.insert(entry.code.clone(), position);
        }

        let mut datasets_by_label: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, dataset) in datasets.iter().enumerate() {
            for label in &dataset.parameter_labels {
                datasets_by_label
                    .entry(normalize(label))
                    .or_default()
                    .push(position);
            }
        }

        Self {
            layers_by_name,
            parameters_by_code,
            datasets_by_label,
            duplicate_layer_names,
        }
    }

    /// Position of the layer with this name, matched case-insensitively.
    pub fn layer_position(&self, name: &str) -> Option<usize> {
        self.layers_by_name.get(&normalize(name)).copied()
    }

    /// Position of the parameter with this exact code.
    pub fn parameter_position(&self, code: &str) -> Option<usize> {
        self.parameters_by_code.get(code).copied()
    }

    /// Positions of every dataset listing this label, matched
    /// case-insensitively, in document order. Empty when the label is
    /// unknown.
    pub fn dataset_positions_for_label(&self, label: &str) -> &[usize] {
        self.datasets_by_label
            .get(&normalize(label))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Layer names that collided during the build, in document order.
    pub fn duplicate_layer_names(&self) -> &[String] {
        &self.duplicate_layer_names
    }
}

// =============================================================================
// Tests
// =============================================================================
