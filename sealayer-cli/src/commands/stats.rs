//! `sealayer stats` catalogue summary.

use sealayer::service::CatalogService;

use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(runner: &CliRunner, service: &CatalogService, json: bool) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;
    let summary = snapshot.summary();

    if json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|err| CliError::Serialize(err.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Catalogue summary");
    println!("=================");
    println!("Loaded at:              {}", snapshot.loaded_at().to_rfc3339());
    println!("Layers:                 {}", summary.total_layers);
    println!("Parameters:             {}", summary.total_parameters);
    println!("Datasets:               {}", summary.total_datasets);
    println!();
    println!("Improvement potential:");
    println!("  small                 {}", summary.improvement.small);
    println!("  medium                {}", summary.improvement.medium);
    println!("  large                 {}", summary.improvement.large);
    println!("Difficulty:");
    println!("  low                   {}", summary.difficulty.low);
    println!("  medium                {}", summary.difficulty.medium);
    println!("  high                  {}", summary.difficulty.high);
    println!();
    println!("Satellite capable:      {}", summary.satellite_count);
    println!("Digital Earth Sweden:   {}", summary.digital_earth_sweden_count);

    match &summary.availability {
        Some(stats) => {
            println!();
            println!("Availability index over {} scored layers:", stats.count);
            println!("  mean                  {:.1}", stats.mean);
            println!("  min                   {:.1}", stats.min);
            println!("  max                   {:.1}", stats.max);
        }
        None => {
            println!();
            println!("No layers carry an availability score.");
        }
    }

    let warnings = snapshot.warnings();
    if !warnings.is_empty() {
        println!();
        println!("Load warnings ({}):", warnings.len());
        for warning in warnings {
            println!("  {warning}");
        }
    }

    Ok(())
}
