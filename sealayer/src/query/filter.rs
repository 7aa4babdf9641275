//! Conjunctive layer filtering.

use crate::index::normalize;
use crate::model::{Difficulty, ImprovementPotential, Layer};

use super::search::layer_matches;

/// A set of independently optional predicates, combined with AND.
///
/// An empty selection is a no-op, never an exclude-everything: an empty
/// theme list means "any theme", a false boolean gate means "gate off".
/// Predicates are independent, so applying two filters in either order
/// yields the same result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerFilter {
    /// Substring search over name, summary and theme, as in
    /// [`search_layers`](super::search_layers). Blank means no text
    /// constraint.
    pub search: String,
    /// Accepted themes, compared case-insensitively. Empty means any.
    pub themes: Vec<String>,
    /// Accepted improvement potentials. Empty means any.
    pub improvement: Vec<ImprovementPotential>,
    /// Accepted difficulties. Empty means any.
    pub difficulty: Vec<Difficulty>,
    /// When true, only satellite-capable layers pass.
    pub satellite_only: bool,
    /// When true, only Digital Earth Sweden compatible layers pass.
    pub digital_earth_sweden_only: bool,
}

impl LayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.themes.push(theme.into());
        self
    }

    pub fn with_improvement(mut self, improvement: ImprovementPotential) -> Self {
        self.improvement.push(improvement);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty.push(difficulty);
        self
    }

    pub fn with_satellite_only(mut self, satellite_only: bool) -> Self {
        self.satellite_only = satellite_only;
        self
    }

    pub fn with_digital_earth_sweden_only(mut self, digital_earth_sweden_only: bool) -> Self {
        self.digital_earth_sweden_only = digital_earth_sweden_only;
        self
    }

    /// Whether a layer passes every active predicate.
    pub fn matches(&self, layer: &Layer) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() && !layer_matches(layer, &needle) {
            return false;
        }
        if !self.themes.is_empty() {
            let theme = normalize(&layer.theme);
            if !self.themes.iter().any(|t| normalize(t) == theme) {
                return false;
            }
        }
        if !self.improvement.is_empty() && !self.improvement.contains(&layer.improvement_potential)
        {
            return false;
        }
        if !self.difficulty.is_empty() && !self.difficulty.contains(&layer.difficulty) {
            return false;
        }
        if self.satellite_only && !layer.satellite_capable {
            return false;
        }
        if self.digital_earth_sweden_only && !layer.digital_earth_sweden_compatible {
            return false;
        }
        true
    }
}

/// Apply a filter, preserving input order.
pub fn filter_layers<'a, I>(layers: I, filter: &LayerFilter) -> Vec<&'a Layer>
where
    I: IntoIterator<Item = &'a Layer>,
{
    layers
        .into_iter()
        .filter(|layer| filter.matches(layer))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
