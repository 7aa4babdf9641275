//! Structural validation of the three raw documents.
//!
//! Runs between fetch and typed parsing, over raw JSON values: a missing
//! or empty collection is fatal, because every downstream query would
//! silently answer "no results" and mask the failure. Field drift on a
//! sample layer record is advisory only and becomes load-report
//! warnings.

use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// The three catalogue collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Layers,
    Parameters,
    Datasets,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Layers,
        CollectionKind::Parameters,
        CollectionKind::Datasets,
    ];

    /// Document file name under the catalogue base location.
    pub fn document_name(self) -> &'static str {
        match self {
            CollectionKind::Layers => "layers.json",
            CollectionKind::Parameters => "parameters.json",
            CollectionKind::Datasets => "datasets.json",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKind::Layers => "layers",
            CollectionKind::Parameters => "parameters",
            CollectionKind::Datasets => "datasets",
        };
        f.write_str(name)
    }
}

/// Fatal structural defects. Either one aborts the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the {0} collection is missing")]
    MissingCollection(CollectionKind),
    #[error("the {0} collection is empty")]
    EmptyCollection(CollectionKind),
}

/// Advisory findings that do not block readiness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

/// Fields every layer record is expected to carry. Absence is schema
/// drift, reported but tolerated; parsing fills defaults.
const EXPECTED_LAYER_FIELDS: [&str; 9] = [
    "name",
    "theme",
    "summary",
    "availability_index",
    "improvement_potential",
    "difficulty",
    "satellite_capable",
    "digital_earth_sweden_compatible",
    "parameters",
];

/// Validate the three raw documents, in collection order.
///
/// Presence is checked first for all three, then emptiness, then the
/// sample-record drift check, so the reported error is always the
/// earliest defect in that fixed order.
pub fn validate_documents(
    layers: &Value,
    parameters: &Value,
    datasets: &Value,
) -> Result<ValidationReport, ValidationError> {
    let documents = [
        (CollectionKind::Layers, layers),
        (CollectionKind::Parameters, parameters),
        (CollectionKind::Datasets, datasets),
    ];

    for (kind, value) in &documents {
        if value.is_null() {
            return Err(ValidationError::MissingCollection(*kind));
        }
    }

    for (kind, value) in &documents {
        let empty = match value {
            Value::Array(items) => items.is_empty(),
            Value::Object(entries) => entries.is_empty(),
            // Wrong top-level shape is caught by typed parsing.
            _ => false,
        };
        if empty {
            return Err(ValidationError::EmptyCollection(*kind));
        }
    }

    let mut report = ValidationReport::default();
    if let Some(sample) = layers.as_array().and_then(|items| items.first()) {
        if let Some(record) = sample.as_object() {
            for field in EXPECTED_LAYER_FIELDS {
                if !record.contains_key(field) {
                    warn!(field, "layer records are missing an expected field");
                    report
                        .warnings
                        .push(format!("layer records are missing the \"{field}\" field"));
                }
            }
        }
    }

    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
