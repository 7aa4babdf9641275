//! SeaLayer command line interface.
//!
//! Thin argument-parsing layer over the `sealayer` library crate. Each
//! subcommand builds the shared [`CliRunner`] (config, logging, tokio
//! runtime), constructs the catalogue service, and hands off to its
//! handler in [`commands`].

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::{DifficultyArg, DirectionArg, ImprovementArg, SortArg};
use commands::config::ConfigCommands;
use error::CliError;
use runner::CliRunner;
use sealayer::service::CatalogService;

#[derive(Parser)]
#[command(name = "sealayer", about = "Marine environmental data catalogue explorer", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Load catalogue documents from a local directory instead of HTTP
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Base URL for catalogue documents, overriding the configured one
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Mirror debug-level log output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List catalogue layers with optional filtering and sorting
    Layers {
        /// Substring matched against layer name, summary and theme
        #[arg(long)]
        search: Option<String>,

        /// Keep only layers in this theme (repeatable)
        #[arg(long = "theme", value_name = "THEME")]
        themes: Vec<String>,

        /// Keep only these improvement potentials (repeatable)
        #[arg(long, value_enum)]
        improvement: Vec<ImprovementArg>,

        /// Keep only these difficulty grades (repeatable)
        #[arg(long, value_enum)]
        difficulty: Vec<DifficultyArg>,

        /// Keep only satellite-capable layers
        #[arg(long)]
        satellite: bool,

        /// Keep only Digital Earth Sweden compatible layers
        #[arg(long)]
        digital_earth_sweden: bool,

        /// Sort field
        #[arg(long, value_enum, default_value = "name")]
        sort: SortArg,

        /// Sort direction
        #[arg(long, value_enum, default_value = "asc")]
        direction: DirectionArg,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one layer in detail
    Show {
        /// Layer name (case-insensitive)
        name: String,

        /// Also resolve the datasets behind each parameter
        #[arg(long)]
        datasets: bool,
    },

    /// List datasets, or resolve those behind a parameter
    Datasets {
        /// Substring matched against dataset name and source
        #[arg(long)]
        search: Option<String>,

        /// Resolve datasets for this parameter code
        #[arg(long)]
        code: Option<String>,

        /// Resolve datasets for this parameter label
        #[arg(long)]
        label: Option<String>,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List parameters, or show one code in detail
    Parameters {
        /// Substring matched against code, label and definition
        #[arg(long)]
        search: Option<String>,

        /// Show this code in detail with its related datasets
        #[arg(long)]
        code: Option<String>,

        /// Show at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List the distinct layer themes
    Themes,

    /// Print a catalogue summary
    Stats {
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        error.exit();
    }
}

/// Build the runner and service shared by every catalogue command.
fn setup(
    verbose: bool,
    data_dir: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<(CliRunner, CatalogService), CliError> {
    let runner = CliRunner::new(verbose)?;
    let service = runner.service(data_dir, base_url)?;
    Ok((runner, service))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        command,
        data_dir,
        base_url,
        verbose,
    } = cli;

    match command {
        Command::Layers {
            search,
            themes,
            improvement,
            difficulty,
            satellite,
            digital_earth_sweden,
            sort,
            direction,
            limit,
        } => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            let opts = commands::layers::LayerListOpts {
                search,
                themes,
                improvement: improvement.into_iter().map(Into::into).collect(),
                difficulty: difficulty.into_iter().map(Into::into).collect(),
                satellite,
                digital_earth_sweden,
                sort: sort.into(),
                direction: direction.into(),
                limit,
            };
            commands::layers::run(&runner, &service, &opts)
        }

        Command::Show { name, datasets } => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            commands::show::run(&runner, &service, &name, datasets)
        }

        Command::Datasets {
            search,
            code,
            label,
            limit,
        } => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            commands::datasets::run(
                &runner,
                &service,
                search.as_deref(),
                code.as_deref(),
                label.as_deref(),
                limit,
            )
        }

        Command::Parameters {
            search,
            code,
            limit,
        } => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            commands::parameters::run(&runner, &service, search.as_deref(), code.as_deref(), limit)
        }

        Command::Themes => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            commands::themes::run(&runner, &service)
        }

        Command::Stats { json } => {
            let (runner, service) = setup(verbose, data_dir, base_url)?;
            commands::stats::run(&runner, &service, json)
        }

        // Config subcommands run without a runtime or a loaded catalogue.
        Command::Config { command } => commands::config::run(command),
    }
}
