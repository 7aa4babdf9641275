//! Parameter-to-dataset join resolution.
//!
//! Datasets describe what they measure as free-text labels only, so the
//! many-to-many relationship between parameters and datasets has to be
//! recovered by string matching at query time. The resolver runs three
//! non-exclusive passes and unions their hits:
//!
//! 1. the parameter code, matched exactly against the label index;
//! 2. the parameter label, matched exactly against the label index;
//! 3. a fallback scan testing every dataset label for either pattern as a
//!    case-insensitive substring.
//!
//! Union-of-three favours recall over precision: a surplus dataset in the
//! result is reviewed by a human, a missing one is invisible. The
//! substring pass can over-match on very short codes; no minimum-length
//! guard is applied.

use std::collections::HashSet;

use crate::index::{normalize, CatalogIndex};
use crate::model::Dataset;

/// Resolves parameter identities to related datasets. Borrows the
/// snapshot's dataset collection and the index built from it.
pub struct JoinResolver<'a> {
    datasets: &'a [Dataset],
    index: &'a CatalogIndex,
}

impl<'a> JoinResolver<'a> {
    pub fn new(datasets: &'a [Dataset], index: &'a CatalogIndex) -> Self {
        Self { datasets, index }
    }

    /// Datasets related to the parameter identified by `code` and/or
    /// `label`. Duplicate-free; iteration order is first-seen across the
    /// three passes. Blank inputs match nothing, so a fully blank
    /// identity yields an empty result.
    pub fn resolve(&self, code: &str, label: &str) -> Vec<&'a Dataset> {
        let mut seen = HashSet::new();
        let mut positions = Vec::new();

        for &position in self.exact_positions(code) {
            if seen.insert(position) {
                positions.push(position);
            }
        }
        for &position in self.exact_positions(label) {
            if seen.insert(position) {
                positions.push(position);
            }
        }
        for position in self.fallback_positions(code, label) {
            if seen.insert(position) {
                positions.push(position);
            }
        }

        positions.into_iter().map(|p| &self.datasets[p]).collect()
    }

    /// Exact-match pass: dataset positions whose label list contains
    /// `pattern` verbatim after normalization. Blank patterns match
    /// nothing.
    pub fn exact_positions(&self, pattern: &str) -> &[usize] {
        if pattern.trim().is_empty() {
            return &[];
        }
        self.index.dataset_positions_for_label(pattern)
    }

    /// Fallback pass: dataset positions where any label contains `code`
    /// or `label` as a case-insensitive substring. A blank pattern is
    /// contained in every string, so blank inputs are excluded rather
    /// than matching the whole catalogue. May contain duplicates when a
    /// dataset matches through several of its labels; `resolve` dedups.
    pub fn fallback_positions(&self, code: &str, label: &str) -> Vec<usize> {
        let code = normalize(code);
        let label = normalize(label);
        if code.is_empty() && label.is_empty() {
            return Vec::new();
        }

        let mut positions = Vec::new();
        for (position, dataset) in self.datasets.iter().enumerate() {
            for dataset_label in &dataset.parameter_labels {
                let candidate = normalize(dataset_label);
                let hit = (!code.is_empty() && candidate.contains(&code))
                    || (!label.is_empty() && candidate.contains(&label));
                if hit {
                    positions.push(position);
                    break;
                }
            }
        }
        positions
    }
}

// =============================================================================
// Tests
// =============================================================================
