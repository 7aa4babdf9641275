//! Summary statistics over the layer collection.

use serde::Serialize;

use crate::model::{Difficulty, ImprovementPotential, Layer};

/// Layer counts per improvement potential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImprovementDistribution {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

/// Layer counts per difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Spread of positive availability indexes. Layers scored zero or below
/// are treated as unscored and excluded, so `count` can be smaller than
/// the layer total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvailabilityStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// One-pass summary of the catalogue.
///
/// `availability` is `None` when no layer carries a positive score;
/// callers render that as "not yet assessed" rather than dividing by
/// zero. Collection totals default to zero and are attached by
/// [`with_collection_totals`](CatalogSummary::with_collection_totals)
/// when the summary is produced from a full snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_layers: usize,
    pub improvement: ImprovementDistribution,
    pub difficulty: DifficultyDistribution,
    pub satellite_count: usize,
    pub digital_earth_sweden_count: usize,
    pub availability: Option<AvailabilityStats>,
    pub total_parameters: usize,
    pub total_datasets: usize,
}

impl CatalogSummary {
    /// Aggregate every figure in a single linear pass.
    pub fn from_layers(layers: &[Layer]) -> Self {
        let mut summary = CatalogSummary {
            total_layers: layers.len(),
            ..CatalogSummary::default()
        };

        let mut sum = 0.0;
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut count = 0usize;

        for layer in layers {
            match layer.improvement_potential {
                ImprovementPotential::Small => summary.improvement.small += 1,
                ImprovementPotential::Medium => summary.improvement.medium += 1,
                ImprovementPotential::Large => summary.improvement.large += 1,
            }
            match layer.difficulty {
                Difficulty::Low => summary.difficulty.low += 1,
                Difficulty::Medium => summary.difficulty.medium += 1,
                Difficulty::High => summary.difficulty.high += 1,
            }
            if layer.satellite_capable {
                summary.satellite_count += 1;
            }
            if layer.digital_earth_sweden_compatible {
                summary.digital_earth_sweden_count += 1;
            }

            let score = layer.availability_index;
            if score.is_finite() && score > 0.0 {
                sum += score;
                min = min.min(score);
                max = max.max(score);
                count += 1;
            }
        }

        if count > 0 {
            summary.availability = Some(AvailabilityStats {
                mean: sum / count as f64,
                min,
                max,
                count,
            });
        }

        summary
    }

    pub fn with_collection_totals(mut self, parameters: usize, datasets: usize) -> Self {
        self.total_parameters = parameters;
        self.total_datasets = datasets;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(
        name: &str,
        improvement: ImprovementPotential,
        difficulty: Difficulty,
        satellite: bool,
        availability: f64,
    ) -> Layer {
        Layer {
            name: name.to_string(),
            improvement_potential: improvement,
            difficulty,
            satellite_capable: satellite,
            availability_index: availability,
            ..Layer::default()
        }
    }

    #[test]
    fn test_distributions_and_counts() {
        let layers = vec![
            layer("A", ImprovementPotential::Large, Difficulty::High, true, 20.0),
            layer("B", ImprovementPotential::Large, Difficulty::Low, false, 40.0),
            layer("C", ImprovementPotential::Small, Difficulty::Medium, true, 60.0),
        ];

        let summary = CatalogSummary::from_layers(&layers);
        assert_eq!(summary.total_layers, 3);
        assert_eq!(summary.improvement.large, 2);
        assert_eq!(summary.improvement.small, 1);
        assert_eq!(summary.improvement.medium, 0);
        assert_eq!(summary.difficulty.high, 1);
        assert_eq!(summary.difficulty.low, 1);
        assert_eq!(summary.difficulty.medium, 1);
        assert_eq!(summary.satellite_count, 2);
    }

    #[test]
    fn test_availability_spread_over_positive_scores_only() {
        let layers = vec![
            layer("A", ImprovementPotential::Medium, Difficulty::Medium, false, 30.0),
            layer("B", ImprovementPotential::Medium, Difficulty::Medium, false, 0.0),
            layer("C", ImprovementPotential::Medium, Difficulty::Medium, false, 90.0),
        ];

        let summary = CatalogSummary::from_layers(&layers);
        let availability = summary.availability.unwrap();
        assert_eq!(availability.count, 2);
        assert_eq!(availability.mean, 60.0);
        assert_eq!(availability.min, 30.0);
        assert_eq!(availability.max, 90.0);
    }

    #[test]
    fn test_availability_omitted_when_unscored() {
        let layers = vec![
            layer("A", ImprovementPotential::Medium, Difficulty::Medium, false, 0.0),
            layer("B", ImprovementPotential::Medium, Difficulty::Medium, false, 0.0),
        ];
        let summary = CatalogSummary::from_layers(&layers);
        assert_eq!(summary.availability, None);
    }

    #[test]
    fn test_empty_catalogue_summary() {
        let summary = CatalogSummary::from_layers(&[]);
        assert_eq!(summary.total_layers, 0);
        assert_eq!(summary.availability, None);
    }

    #[test]
    fn test_digital_earth_sweden_count() {
        let mut compatible = layer("A", ImprovementPotential::Medium, Difficulty::Medium, false, 10.0);
        compatible.digital_earth_sweden_compatible = true;
        let other = layer("B", ImprovementPotential::Medium, Difficulty::Medium, false, 10.0);

        let summary = CatalogSummary::from_layers(&[compatible, other]);
        assert_eq!(summary.digital_earth_sweden_count, 1);
    }

    #[test]
    fn test_collection_totals_builder() {
        let summary = CatalogSummary::from_layers(&[]).with_collection_totals(42, 17);
        assert_eq!(summary.total_parameters, 42);
        assert_eq!(summary.total_datasets, 17);
    }
}
