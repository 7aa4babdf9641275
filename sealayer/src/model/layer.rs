//! Catalogue layer types.
//!
//! A [`Layer`] is one entry of the layers document: a mapped marine
//! phenomenon (for example a species distribution or a pressure source)
//! together with editorial metadata about how good its underlying data is
//! and how hard it would be to improve. Layers carry no stable numeric id;
//! the `name` field is the sole external identifier and is treated as
//! unique case-insensitively.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::de;

/// How much a layer's data quality could realistically improve.
///
/// Unrecognized labels in the source document degrade to [`Medium`]
/// rather than failing the parse.
///
/// [`Medium`]: ImprovementPotential::Medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImprovementPotential {
    Small,
    #[default]
    Medium,
    Large,
}

impl ImprovementPotential {
    /// All values in ascending rank order, for filter option lists.
    pub const ALL: [ImprovementPotential; 3] = [
        ImprovementPotential::Small,
        ImprovementPotential::Medium,
        ImprovementPotential::Large,
    ];

    /// Total-order rank used by sorting: small < medium < large.
    pub fn rank(self) -> u8 {
        match self {
            ImprovementPotential::Small => 1,
            ImprovementPotential::Medium => 2,
            ImprovementPotential::Large => 3,
        }
    }

    /// Canonical lowercase label as it appears in the source documents.
    pub fn label(self) -> &'static str {
        match self {
            ImprovementPotential::Small => "small",
            ImprovementPotential::Medium => "medium",
            ImprovementPotential::Large => "large",
        }
    }

    /// Parse a source label. Matching is trimmed and case-insensitive;
    /// anything unrecognized becomes `Medium`.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "small" => ImprovementPotential::Small,
            "large" => ImprovementPotential::Large,
            _ => ImprovementPotential::Medium,
        }
    }
}

impl fmt::Display for ImprovementPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ImprovementPotential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ImprovementPotential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ImprovementPotential::from_label(&raw))
    }
}

/// How hard it would be to improve a layer's data quality.
///
/// Same degradation rule as [`ImprovementPotential`]: unknown labels
/// become [`Medium`](Difficulty::Medium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
}

impl Difficulty {
    /// All values in ascending rank order, for filter option lists.
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::High];

    /// Total-order rank used by sorting: low < medium < high.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Low => 1,
            Difficulty::Medium => 2,
            Difficulty::High => 3,
        }
    }

    /// Canonical lowercase label as it appears in the source documents.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }

    /// Parse a source label. Matching is trimmed and case-insensitive;
    /// anything unrecognized becomes `Medium`.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => Difficulty::Low,
            "high" => Difficulty::High,
            _ => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Difficulty::from_label(&raw))
    }
}

/// A layer's reference to a measurement parameter.
///
/// Both fields are free text copied from the source document. `code` is
/// intended to match a key of the parameter catalogue and `label` a
/// dataset label, but neither is enforced anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRef {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub label: String,
}

impl ParameterRef {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// One entry of the layers document.
///
/// Every field is optional on the wire; absent scalars default to empty
/// or zero so that a partially filled record still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Display name; unique within the catalogue ignoring case.
    #[serde(default)]
    pub name: String,
    /// Grouping theme, e.g. "Fish" or "Marine mammals".
    #[serde(default)]
    pub theme: String,
    /// Editorial category within the theme.
    #[serde(default)]
    pub category: String,
    /// Short description of what the layer maps.
    #[serde(default)]
    pub summary: String,
    /// How the current layer data was produced.
    #[serde(default)]
    pub lineage: String,
    /// Editorial notes on how the layer could be improved.
    #[serde(default)]
    pub recommendations: String,
    /// Overall data availability score, 0-100.
    #[serde(default, deserialize_with = "de::lenient_score")]
    pub availability_index: f64,
    #[serde(default)]
    pub improvement_potential: ImprovementPotential,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Whether satellite observation could feed this layer.
    #[serde(default)]
    pub satellite_capable: bool,
    /// Whether Digital Earth Sweden products cover this layer.
    #[serde(default)]
    pub digital_earth_sweden_compatible: bool,
    /// Ordered parameter references; order is meaningful and preserved.
    #[serde(default)]
    pub parameters: Vec<ParameterRef>,
}

// =============================================================================
// Tests
// =============================================================================
