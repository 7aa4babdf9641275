//! `sealayer show` single layer detail.

use sealayer::service::CatalogService;

use crate::commands::common::yes_no;
use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(
    runner: &CliRunner,
    service: &CatalogService,
    name: &str,
    with_datasets: bool,
) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;
    let layer = snapshot
        .layer_by_name(name)
        .ok_or_else(|| CliError::LayerNotFound(name.to_string()))?;

    println!("{}", layer.name);
    println!("{}", "=".repeat(layer.name.chars().count()));
    println!("Theme:                  {}", layer.theme);
    if !layer.category.is_empty() {
        println!("Category:               {}", layer.category);
    }
    println!("Availability index:     {:.1}", layer.availability_index);
    println!(
        "Improvement potential:  {}",
        layer.improvement_potential.label()
    );
    println!("Difficulty:             {}", layer.difficulty.label());
    println!(
        "Satellite capable:      {}",
        yes_no(layer.satellite_capable)
    );
    println!(
        "Digital Earth Sweden:   {}",
        yes_no(layer.digital_earth_sweden_compatible)
    );
    println!(
        "Related datasets:       {}",
        snapshot.related_dataset_count(layer)
    );

    for (heading, text) in [
        ("Summary", &layer.summary),
        ("Lineage", &layer.lineage),
        ("Recommendations", &layer.recommendations),
    ] {
        if !text.is_empty() {
            println!();
            println!("{heading}:");
            println!("  {text}");
        }
    }

    if layer.parameters.is_empty() {
        println!();
        println!("No parameter references.");
        return Ok(());
    }

    println!();
    println!("Parameters ({}):", layer.parameters.len());
    let resolver = snapshot.join_resolver();
    for parameter in &layer.parameters {
        match snapshot.parameter_by_code(&parameter.code) {
            Some(entry) => println!(
                "  {:<10} {:<50} avail {:>5.1}  used by {} layers",
                parameter.code,
                entry.preferred_label,
                entry.availability_index,
                entry.occurrence,
            ),
            None => println!("  {:<10} {}", parameter.code, parameter.label),
        }

        if with_datasets {
            let datasets = resolver.resolve(&parameter.code, &parameter.label);
            if datasets.is_empty() {
                println!("             no matching datasets");
            }
            for dataset in datasets {
                println!(
                    "             [{}] {} ({}, {})",
                    dataset.id,
                    dataset.name,
                    dataset.source,
                    dataset.span()
                );
            }
        }
    }

    Ok(())
}
