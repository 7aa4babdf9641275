//! `sealayer datasets` listing and parameter joins.

use sealayer::model::Dataset;
use sealayer::query::search_datasets;
use sealayer::service::CatalogService;

use crate::commands::common::clip;
use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(
    runner: &CliRunner,
    service: &CatalogService,
    search: Option<&str>,
    code: Option<&str>,
    label: Option<&str>,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;

    if code.is_some() || label.is_some() {
        let code = code.unwrap_or_default();
        // A bare code is enough; borrow the catalogue label for the
        // substring pass when the caller did not supply one.
        let label = match label {
            Some(label) => label,
            None => snapshot
                .parameter_by_code(code)
                .map(|entry| entry.preferred_label.as_str())
                .unwrap_or_default(),
        };

        let matches = snapshot.datasets_for_parameter(code, label);
        if matches.is_empty() {
            println!("No datasets matched code {code:?} / label {label:?}.");
            return Ok(());
        }
        print_table(&matches, limit, snapshot.datasets().len());
        return Ok(());
    }

    let matches = search_datasets(snapshot.datasets(), search.unwrap_or_default());
    print_table(&matches, limit, snapshot.datasets().len());
    Ok(())
}

fn print_table(datasets: &[&Dataset], limit: Option<usize>, total: usize) {
    let shown = limit.unwrap_or(datasets.len()).min(datasets.len());

    println!(
        "{:>4} {:<44} {:<26} {:<13} {:<12} {:<12}",
        "ID", "NAME", "SOURCE", "SPAN", "SPATIAL", "TEMPORAL"
    );
    for dataset in &datasets[..shown] {
        println!(
            "{:>4} {:<44} {:<26} {:<13} {:<12} {:<12}",
            dataset.id,
            clip(&dataset.name, 44),
            clip(&dataset.source, 26),
            dataset.span(),
            clip(&dataset.spatial_resolution, 12),
            clip(&dataset.temporal_resolution, 12),
        );
    }

    println!();
    if shown < datasets.len() {
        println!(
            "{} of {} datasets (showing first {})",
            datasets.len(),
            total,
            shown
        );
    } else {
        println!("{} of {} datasets", datasets.len(), total);
    }
}
