use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use spbmetro_cli::commands::info::handle_info_command;
use spbmetro_cli::commands::lines::handle_lines_command;
use spbmetro_cli::commands::route::{handle_route_command, RouteAlgorithmArg, RouteCommandArgs};
use spbmetro_cli::commands::stations::handle_stations_command;
use spbmetro_cli::output::{print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "SpbMetro route planning utilities")]
struct Cli {
    /// Override the metro map JSON file path.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Suppress the logo banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two station names.
    Route {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Algorithm to use when planning the route.
        #[arg(long, value_enum, default_value = "dijkstra")]
        algorithm: RouteAlgorithmArg,
        /// Station name to leave out of the route (repeatable).
        #[arg(long = "avoid")]
        avoid: Vec<String>,
    },
    /// List the stations of the network, grouped by line.
    Stations {
        /// Restrict the listing to a single line number.
        #[arg(long)]
        line: Option<u32>,
    },
    /// List the metro lines with their station counts.
    Lines,
    /// Summarise the loaded network.
    Info,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.no_logo && !cli.format.is_machine_readable() {
        print_logo();
    }

    let map_path = cli.map.as_deref();
    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
            avoid,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                algorithm,
                avoid,
            };
            handle_route_command(map_path, cli.format, &args)
        }
        Command::Stations { line } => handle_stations_command(map_path, cli.format, line),
        Command::Lines => handle_lines_command(map_path, cli.format),
        Command::Info => handle_info_command(map_path, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
