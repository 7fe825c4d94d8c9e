//! cityroute - find a route between two cities with BFS, DFS and A*

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use cityroute::errors::RouteError;
use cityroute::{graph, io, logging, search_report, Algorithm};


#[derive(Debug, Parser)]
#[command(name = "cityroute", version, about = "Find a route between two cities")]
struct Cli {
    /// File holding the start and destination on two lines, `-` for stdin
    input: String,

    /// Where to write the report, `-` for stdout
    output: String,

    /// City dataset: name region latitude longitude
    #[arg(long, env = "CITYROUTE_CITIES", default_value = "city.dat")]
    cities: PathBuf,

    /// Edge dataset: name name
    #[arg(long, env = "CITYROUTE_EDGES", default_value = "edge.dat")]
    edges: PathBuf,

    /// Run a single algorithm instead of all three
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Explicit tracing filter, e.g. `debug` or `cityroute=trace`
    #[arg(long)]
    log_level: Option<String>,
}

fn run(cli: &Cli) -> Result<(), RouteError> {
    let (start, destination) = io::read_endpoints(&cli.input)?;
    debug!(%start, %destination, "endpoints");

    let graph = graph::load_graph(&cli.cities, &cli.edges)?;

    let algorithms = match cli.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };
    let report = search_report(&graph, &algorithms, &start, &destination)?;

    io::write_report(&cli.output, &report)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
