//! Parameter catalogue entries.
//!
//! The parameters document is a JSON object keyed by parameter code; the
//! code is not repeated inside the entry. [`entries_from_map`] folds the
//! map into a flat list with the code injected, which is the shape the
//! rest of the crate works with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::de;

/// One entry of the parameter catalogue.
///
/// The overall availability index is defined as the arithmetic mean of the
/// four sub-indexes, but the published value is stored as-is; see
/// [`mean_of_subindexes`](ParameterEntry::mean_of_subindexes) for the
/// derived figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    /// Catalogue code, injected from the document's map key.
    #[serde(skip)]
    pub code: String,
    /// Human-readable parameter name.
    #[serde(default)]
    pub preferred_label: String,
    /// Formal definition text, when the catalogue carries one.
    #[serde(default)]
    pub definition: Option<String>,
    /// Published overall availability score, 0-100.
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub availability_index: f64,
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub horizontal_resolution_pct: f64,
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub spatial_coverage_pct: f64,
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub time_coverage_pct: f64,
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub up_to_date_pct: f64,
    /// How many layers reference this parameter, per the source document.
    #[serde(default)]
    pub occurrence: u32,
}

impl ParameterEntry {
    /// Arithmetic mean of the four sub-indexes. This is the defined
    /// availability index; the published `availability_index` field may
    /// lag behind it when the document is stale.
    pub fn mean_of_subindexes(&self) -> f64 {
        (self.horizontal_resolution_pct
            + self.spatial_coverage_pct
            + self.time_coverage_pct
            + self.up_to_date_pct)
            / 4.0
    }
}

/// Flatten the code-keyed document map into entries carrying their code.
/// `BTreeMap` keeps the resulting list in stable code order.
pub fn entries_from_map(map: BTreeMap<String, ParameterEntry>) -> Vec<ParameterEntry> {
    map.into_iter()
        .map(|(code, mut entry)| {
            entry.code = code;
            entry
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
