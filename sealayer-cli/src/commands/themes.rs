//! `sealayer themes` listing.

use sealayer::index::normalize;
use sealayer::service::CatalogService;

use crate::error::CliError;
use crate::runner::CliRunner;

pub fn run(runner: &CliRunner, service: &CatalogService) -> Result<(), CliError> {
    let snapshot = runner.load_snapshot(service)?;
    let themes = snapshot.unique_themes();

    if themes.is_empty() {
        println!("No themes in the catalogue.");
        return Ok(());
    }

    println!("{:<40} {:>6}", "THEME", "LAYERS");
    for theme in &themes {
        let count = snapshot
            .layers()
            .iter()
            .filter(|layer| normalize(&layer.theme) == normalize(theme))
            .count();
        println!("{theme:<40} {count:>6}");
    }

    println!();
    println!("{} themes", themes.len());
    Ok(())
}
