//! Shared argument types and output helpers for command handlers.

use clap::ValueEnum;

use sealayer::model::{Difficulty, ImprovementPotential};
use sealayer::query::{SortDirection, SortField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImprovementArg {
    Small,
    Medium,
    Large,
}

impl From<ImprovementArg> for ImprovementPotential {
    fn from(arg: ImprovementArg) -> Self {
        match arg {
            ImprovementArg::Small => ImprovementPotential::Small,
            ImprovementArg::Medium => ImprovementPotential::Medium,
            ImprovementArg::Large => ImprovementPotential::Large,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Low,
    Medium,
    High,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Low => Difficulty::Low,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::High => Difficulty::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Layer name
    Name,
    /// Layer theme
    Theme,
    /// Availability index
    Availability,
    /// Number of parameter references
    Parameters,
    /// Improvement potential rank
    Improvement,
    /// Difficulty rank
    Difficulty,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortField::Name,
            SortArg::Theme => SortField::Theme,
            SortArg::Availability => SortField::AvailabilityIndex,
            SortArg::Parameters => SortField::ParameterCount,
            SortArg::Improvement => SortField::ImprovementPotential,
            SortArg::Difficulty => SortField::Difficulty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Truncate display text to `width` with an ellipsis.
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_enums_map_to_model_values() {
        assert_eq!(
            ImprovementPotential::from(ImprovementArg::Large),
            ImprovementPotential::Large
        );
        assert_eq!(Difficulty::from(DifficultyArg::Low), Difficulty::Low);
        assert_eq!(SortField::from(SortArg::Availability), SortField::AvailabilityIndex);
        assert_eq!(
            SortDirection::from(DirectionArg::Desc),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_clip_respects_multibyte_text() {
        assert_eq!(clip("Ålgräsängar", 20), "Ålgräsängar");
        assert_eq!(clip("Ålgräsängar i Östersjön", 10), "Ålgräsä...");
    }
}
