//! `sealayer parameters` listing and single-code detail.

use sealayer::query::search_parameters;
use sealayer::service::CatalogService;

use crate::commands::common::clip;
use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(
    runner: &CliRunner,
    service: &CatalogService,
    search: Option<&str>,
    code: Option<&str>,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;

    if let Some(code) = code {
        let entry = snapshot
            .parameter_by_code(code)
            .ok_or_else(|| CliError::ParameterNotFound(code.to_string()))?;

        println!("{}  {}", entry.code, entry.preferred_label);
        if let Some(definition) = &entry.definition {
            println!();
            println!("{definition}");
        }
        println!();
        println!("Availability index:     {:.1}", entry.availability_index);
        println!("Horizontal resolution:  {:.1}", entry.horizontal_resolution_pct);
        println!("Spatial coverage:       {:.1}", entry.spatial_coverage_pct);
        println!("Time coverage:          {:.1}", entry.time_coverage_pct);
        println!("Up to date:             {:.1}", entry.up_to_date_pct);
        println!("Subindex mean:          {:.1}", entry.mean_of_subindexes());
        println!("Used by layers:         {}", entry.occurrence);

        let datasets = snapshot.datasets_for_parameter(&entry.code, &entry.preferred_label);
        println!();
        if datasets.is_empty() {
            println!("No matching datasets.");
        } else {
            println!("Datasets ({}):", datasets.len());
            for dataset in datasets {
                println!(
                    "  [{}] {} ({}, {})",
                    dataset.id,
                    dataset.name,
                    dataset.source,
                    dataset.span()
                );
            }
        }
        return Ok(());
    }

    let matches = search_parameters(snapshot.parameters(), search.unwrap_or_default());
    let shown = limit.unwrap_or(matches.len()).min(matches.len());

    println!(
        "{:<10} {:<52} {:>6} {:>6}",
        "CODE", "PREFERRED LABEL", "AVAIL", "USED"
    );
    for entry in &matches[..shown] {
        println!(
            "{:<10} {:<52} {:>6.1} {:>6}",
            entry.code,
            clip(&entry.preferred_label, 52),
            entry.availability_index,
            entry.occurrence,
        );
    }

    println!();
    if shown < matches.len() {
        println!(
            "{} of {} parameters (showing first {})",
            matches.len(),
            snapshot.parameters().len(),
            shown
        );
    } else {
        println!("{} of {} parameters", matches.len(), snapshot.parameters().len());
    }
    Ok(())
}
