//! `sealayer layers` listing with filtering and sorting.

use sealayer::model::{Difficulty, ImprovementPotential};
use sealayer::query::{filter_layers, sort_layers, LayerFilter, SortDirection, SortField};
use sealayer::service::CatalogService;

use crate::commands::common::{clip, yes_no};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Filter and ordering options collected from the command line.
pub struct LayerListOpts {
    pub search: Option<String>,
    pub themes: Vec<String>,
    pub improvement: Vec<ImprovementPotential>,
    pub difficulty: Vec<Difficulty>,
    pub satellite: bool,
    pub digital_earth_sweden: bool,
    pub sort: SortField,
    pub direction: SortDirection,
    pub limit: Option<usize>,
}

pub fn run(
    runner: &CliRunner,
    service: &CatalogService,
    opts: &LayerListOpts,
) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;

    let mut filter = LayerFilter::new();
    if let Some(search) = &opts.search {
        filter = filter.with_search(search);
    }
    for theme in &opts.themes {
        filter = filter.with_theme(theme);
    }
    for improvement in &opts.improvement {
        filter = filter.with_improvement(*improvement);
    }
    for difficulty in &opts.difficulty {
        filter = filter.with_difficulty(*difficulty);
    }
    filter = filter
        .with_satellite_only(opts.satellite)
        .with_digital_earth_sweden_only(opts.digital_earth_sweden);

    let matched = filter_layers(snapshot.layers(), &filter);
    let total = snapshot.layers().len();
    let matched_count = matched.len();
    let sorted = sort_layers(matched, opts.sort, opts.direction);

    let shown: Vec<_> = match opts.limit {
        Some(limit) => sorted.into_iter().take(limit).collect(),
        None => sorted,
    };

    println!(
        "{:<34} {:<22} {:>6} {:<11} {:<10} {:>4} {:>4} {:>7} {:>9}",
        "NAME", "THEME", "AVAIL", "IMPROVEMENT", "DIFFICULTY", "SAT", "DES", "PARAMS", "DATASETS"
    );
    for layer in &shown {
        println!(
            "{:<34} {:<22} {:>6.1} {:<11} {:<10} {:>4} {:>4} {:>7} {:>9}",
            clip(&layer.name, 34),
            clip(&layer.theme, 22),
            layer.availability_index,
            layer.improvement_potential.label(),
            layer.difficulty.label(),
            yes_no(layer.satellite_capable),
            yes_no(layer.digital_earth_sweden_compatible),
            layer.parameters.len(),
            snapshot.related_dataset_count(layer),
        );
    }

    println!();
    if shown.len() < matched_count {
        println!(
            "{} of {} layers (showing first {})",
            matched_count,
            total,
            shown.len()
        );
    } else {
        println!("{matched_count} of {total} layers");
    }

    Ok(())
}
