//! Real-world dataset records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::de;

/// End of a dataset's temporal span.
///
/// The source document encodes a still-maintained dataset as the literal
/// string `"ongoing"` instead of a year. Unparseable values also map to
/// `Ongoing`, matching the lenient treatment of the rest of the wire
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndYear {
    Year(i32),
    #[default]
    Ongoing,
}

impl EndYear {
    pub fn is_ongoing(self) -> bool {
        matches!(self, EndYear::Ongoing)
    }
}

impl fmt::Display for EndYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndYear::Year(y) => write!(f, "{y}"),
            EndYear::Ongoing => f.write_str("ongoing"),
        }
    }
}

impl Serialize for EndYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EndYear::Year(y) => serializer.serialize_i32(*y),
            EndYear::Ongoing => serializer.serialize_str("ongoing"),
        }
    }
}

impl<'de> Deserialize<'de> for EndYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Value::String(s) = &value {
            if s.trim().eq_ignore_ascii_case("ongoing") {
                return Ok(EndYear::Ongoing);
            }
        }
        Ok(de::year_from_value(&value)
            .map(EndYear::Year)
            .unwrap_or(EndYear::Ongoing))
    }
}

/// One entry of the datasets document: a concrete data product published
/// by an agency, linked to the rest of the catalogue only through its
/// free-text `parameter_labels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Numeric id, unique within the document.
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Publishing organisation.
    #[serde(default)]
    pub source: String,
    #[serde(default, deserialize_with = "de::lenient_year")]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: EndYear,
    /// Free-text spatial resolution, e.g. "250 m grid".
    #[serde(default)]
    pub spatial_resolution: String,
    /// Free-text temporal resolution, e.g. "monthly".
    #[serde(default)]
    pub temporal_resolution: String,
    /// Sea regions the dataset covers.
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub url: String,
    /// Measured-parameter labels; the only cross-reference to layers and
    /// the parameter catalogue, matched as strings.
    #[serde(default)]
    pub parameter_labels: Vec<String>,
}

impl Dataset {
    /// Temporal span for display, e.g. "1998-ongoing" or "2001-2014".
    pub fn span(&self) -> String {
        match self.start_year {
            Some(start) => format!("{start}-{}", self.end_year),
            None => format!("?-{}", self.end_year),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_end_year_variants() {
        let numeric: EndYear = serde_json::from_value(json!(2014)).unwrap();
        assert_eq!(numeric, EndYear::Year(2014));

        let literal: EndYear = serde_json::from_value(json!("ongoing")).unwrap();
        assert_eq!(literal, EndYear::Ongoing);

        let shouty: EndYear = serde_json::from_value(json!("ONGOING")).unwrap();
        assert_eq!(shouty, EndYear::Ongoing);

        let stringly: EndYear = serde_json::from_value(json!("2009")).unwrap();
        assert_eq!(stringly, EndYear::Year(2009));

        let junk: EndYear = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(junk, EndYear::Ongoing);
    }

    #[test]
    fn test_dataset_parses_and_spans() {
        let dataset: Dataset = serde_json::from_value(json!({
            "id": 12,
            "name": "National benthic inventory",
            "source": "SGU",
            "start_year": 1998,
            "end_year": "ongoing",
            "spatial_resolution": "250 m grid",
            "temporal_resolution": "irregular",
            "regions": ["Baltic Proper", "Kattegat"],
            "url": "https://example.se/benthic",
            "parameter_labels": ["Substrate type", "Abundance of biota"]
        }))
        .unwrap();

        assert_eq!(dataset.span(), "1998-ongoing");
        assert!(dataset.end_year.is_ongoing());
        assert_eq!(dataset.regions.len(), 2);
    }

    #[test]
    fn test_dataset_missing_span_fields() {
        let dataset: Dataset = serde_json::from_value(json!({
            "name": "Ad-hoc survey compilation"
        }))
        .unwrap();
        assert_eq!(dataset.start_year, None);
        assert_eq!(dataset.end_year, EndYear::Ongoing);
        assert_eq!(dataset.span(), "?-ongoing");
    }
}
