//! Stable, pure layer sorting.

use std::cmp::Ordering;

use crate::model::Layer;

/// Sortable layer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Theme,
    AvailabilityIndex,
    ParameterCount,
    ImprovementPotential,
    Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ascending comparison of two layers on one field.
///
/// Text fields compare lexicographically case-insensitively. Numeric
/// fields coerce non-finite values to 0. Categorical fields compare by
/// their fixed rank (small < medium < large, low < medium < high);
/// unrecognized source values were already folded to medium at parse
/// time, so no branch here can fail.
pub fn compare_layers(a: &Layer, b: &Layer, field: SortField) -> Ordering {
    match field {
        SortField::Name => text_cmp(&a.name, &b.name),
        SortField::Theme => text_cmp(&a.theme, &b.theme),
        SortField::AvailabilityIndex => {
            finite_or_zero(a.availability_index).total_cmp(&finite_or_zero(b.availability_index))
        }
        SortField::ParameterCount => a.parameters.len().cmp(&b.parameters.len()),
        SortField::ImprovementPotential => a
            .improvement_potential
            .rank()
            .cmp(&b.improvement_potential.rank()),
        SortField::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sort a result sequence by one field.
///
/// Stable: layers comparing equal keep their input order. Descending
/// reverses the ascending comparator rather than defining its own
/// rules, so on a field without ties it yields the ascending sequence
/// back to front. Pure: same inputs, same output sequence, every call.
pub fn sort_layers(
    mut layers: Vec<&Layer>,
    field: SortField,
    direction: SortDirection,
) -> Vec<&Layer> {
    layers.sort_by(|a, b| {
        let ordering = compare_layers(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    layers
}

// =============================================================================
// Tests
// =============================================================================
