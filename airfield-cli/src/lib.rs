//! Command-line interface for the airfield engine.
//!
//! Loads the three CSV datasets, runs one query or report against the
//! resulting index, and renders the outcome as text or JSON. All logic
//! beyond rendering lives in `airfield-core` and `airfield-data`.
#![forbid(unsafe_code)]

mod error;
mod render;

pub use error::CliError;

use airfield_core::{Index, RunwayEnd};
use airfield_data::load_paths;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Run the airfield CLI with the current process arguments.
///
/// Returns the rendered output on success; the binary prints it verbatim.
///
/// # Errors
/// Returns [`CliError`] for argument, load, or serialization failures.
pub fn run() -> Result<String, CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let index = load_paths(&cli.countries, &cli.airports, &cli.runways)?;
    dispatch(&index, &cli.command)
}

#[derive(Debug, Parser)]
#[command(
    name = "airfield",
    about = "Query and report over the countries, airports, and runways datasets",
    version
)]
struct Cli {
    /// Path to the countries CSV file.
    #[arg(long, value_name = "path", default_value = "countries.csv")]
    countries: Utf8PathBuf,
    /// Path to the airports CSV file.
    #[arg(long, value_name = "path", default_value = "airports.csv")]
    airports: Utf8PathBuf,
    /// Path to the runways CSV file.
    #[arg(long, value_name = "path", default_value = "runways.csv")]
    runways: Utf8PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fuzzy-match a country and list its airports with their runways.
    Lookup(LookupArgs),
    /// Aggregate reports over the whole dataset.
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Debug, Args)]
struct LookupArgs {
    /// Country code or (partial) country name.
    query: String,
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// Countries with the most and the fewest airports.
    AirportCounts(LimitArgs),
    /// Runway surface types per country.
    Surfaces(SurfacesArgs),
    /// Most common runway end identifiers.
    RunwayIdents(RunwayIdentArgs),
}

#[derive(Debug, Args)]
struct LimitArgs {
    /// How many countries to list at each extreme.
    #[arg(long, value_name = "n", default_value_t = 10)]
    limit: usize,
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct SurfacesArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct RunwayIdentArgs {
    /// How many identifiers to list.
    #[arg(long, value_name = "n", default_value_t = 10)]
    limit: usize,
    /// Tally high-end identifiers instead of low-end ones.
    #[arg(long)]
    high: bool,
    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn dispatch(index: &Index, command: &Command) -> Result<String, CliError> {
    match command {
        Command::Lookup(args) => {
            let matches = index.lookup_country(&args.query);
            if args.json {
                render::json(&matches)
            } else {
                Ok(render::lookup_text(&matches))
            }
        }
        Command::Report(ReportCommand::AirportCounts(args)) => {
            let extremes = index.airport_count_extremes(args.limit);
            if args.json {
                render::json(&extremes)
            } else {
                Ok(render::extremes_text(&extremes))
            }
        }
        Command::Report(ReportCommand::Surfaces(args)) => {
            let rows = index.surface_types_by_country();
            if args.json {
                render::json(&rows)
            } else {
                Ok(render::surfaces_text(&rows))
            }
        }
        Command::Report(ReportCommand::RunwayIdents(args)) => {
            let end = if args.high { RunwayEnd::High } else { RunwayEnd::Low };
            let idents = index.top_runway_idents(args.limit, end);
            if args.json {
                render::json(&idents)
            } else {
                Ok(render::idents_text(&idents))
            }
        }
    }
}
