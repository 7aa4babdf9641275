//! Case-insensitive substring search over the three collections.
//!
//! A blank query is the identity: it returns the input sequence
//! unchanged, never an empty result.

use crate::model::{Dataset, Layer, ParameterEntry};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Search layers by name, summary or theme.
pub fn search_layers<'a, I>(layers: I, query: &str) -> Vec<&'a Layer>
where
    I: IntoIterator<Item = &'a Layer>,
{
    let needle = query.trim().to_lowercase();
    layers
        .into_iter()
        .filter(|layer| needle.is_empty() || layer_matches(layer, &needle))
        .collect()
}

pub(crate) fn layer_matches(layer: &Layer, needle_lower: &str) -> bool {
    contains_ci(&layer.name, needle_lower)
        || contains_ci(&layer.summary, needle_lower)
        || contains_ci(&layer.theme, needle_lower)
}

/// Search parameter entries by code, preferred label or definition.
pub fn search_parameters<'a, I>(parameters: I, query: &str) -> Vec<&'a ParameterEntry>
where
    I: IntoIterator<Item = &'a ParameterEntry>,
{
    let needle = query.trim().to_lowercase();
    parameters
        .into_iter()
        .filter(|entry| {
            needle.is_empty()
                || contains_ci(&entry.code, &needle)
                || contains_ci(&entry.preferred_label, &needle)
                || entry
                    .definition
                    .as_deref()
                    .is_some_and(|d| contains_ci(d, &needle))
        })
        .collect()
}

/// Search datasets by name or source.
pub fn search_datasets<'a, I>(datasets: I, query: &str) -> Vec<&'a Dataset>
where
    I: IntoIterator<Item = &'a Dataset>,
{
    let needle = query.trim().to_lowercase();
    datasets
        .into_iter()
        .filter(|dataset| {
            needle.is_empty()
                || contains_ci(&dataset.name, &needle)
                || contains_ci(&dataset.source, &needle)
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn layers() -> Vec<Layer> {
        vec![
            Layer {
                name: "Harbour porpoise".to_string(),
                theme: "Marine mammals".to_string(),
                summary: "Modelled porpoise distribution".to_string(),
                ..Layer::default()
            },
            Layer {
                name: "Cod spawning areas".to_string(),
                theme: "Fish".to_string(),
                summary: "Spawning grounds for eastern Baltic cod".to_string(),
                ..Layer::default()
            },
            Layer {
                name: "Eelgrass meadows".to_string(),
                theme: "Vegetation".to_string(),
                summary: "Mapped Zostera marina beds".to_string(),
                ..Layer::default()
            },
        ]
    }

    #[test]
    fn test_blank_query_is_identity() {
        let layers = layers();
        let all = search_layers(&layers, "");
        assert_eq!(all.len(), layers.len());
        for (found, original) in all.iter().zip(layers.iter()) {
            assert_eq!(found.name, original.name);
        }

        let also_blank = search_layers(&layers, "   ");
        assert_eq!(also_blank.len(), layers.len());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let layers = layers();
        let by_name: Vec<_> = search_layers(&layers, "PORPOISE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Harbour porpoise");

        let by_summary = search_layers(&layers, "zostera");
        assert_eq!(by_summary.len(), 1);
        assert_eq!(by_summary[0].name, "Eelgrass meadows");

        let by_theme = search_layers(&layers, "fish");
        assert_eq!(by_theme.len(), 1);
        assert_eq!(by_theme[0].name, "Cod spawning areas");
    }

    #[test]
    fn test_search_misses_return_empty_not_error() {
        let layers = layers();
        assert!(search_layers(&layers, "volcano").is_empty());
    }

    #[test]
    fn test_parameter_search_covers_definition() {
        let parameters = vec![ParameterEntry {
            code: "CHLA".to_string(),
            preferred_label: "Chlorophyll concentration".to_string(),
            definition: Some("Mass concentration of chlorophyll-a per unit volume".to_string()),
            ..ParameterEntry::default()
        }];

        assert_eq!(search_parameters(&parameters, "chla").len(), 1);
        assert_eq!(search_parameters(&parameters, "chlorophyll-a").len(), 1);
        assert!(search_parameters(&parameters, "nitrate").is_empty());
    }

    #[test]
    fn test_dataset_search_covers_name_and_source() {
        let datasets = vec![Dataset {
            name: "National benthic inventory".to_string(),
            source: "SGU".to_string(),
            ..Dataset::default()
        }];

        assert_eq!(search_datasets(&datasets, "benthic").len(), 1);
        assert_eq!(search_datasets(&datasets, "sgu").len(), 1);
        assert!(search_datasets(&datasets, "smhi").is_empty());
    }
}
