use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::commands::quote::{handle_quote_command, QuoteCommandArgs};
use skyroute_cli::commands::route::{handle_route_command, RouteCommandArgs};
use skyroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Airport routing and fare quotes")]
struct Cli {
    /// Directory holding airports.{csv,json} and routes.{csv,json}.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RouteOptions {
    /// Origin airport code.
    #[arg(long = "from")]
    from: String,
    /// Destination airport code.
    #[arg(long = "to")]
    to: String,
    /// Search algorithm: dijkstra, bfs or a-star.
    #[arg(long, default_value = "dijkstra")]
    algorithm: String,
}

impl From<RouteOptions> for RouteCommandArgs {
    fn from(options: RouteOptions) -> Self {
        Self {
            from: options.from,
            to: options.to,
            algorithm: options.algorithm,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two airports.
    Route(RouteOptions),
    /// Compute a route and price it for every fare class.
    Quote {
        #[command(flatten)]
        route: RouteOptions,
        /// Number of passengers.
        #[arg(long, default_value_t = 1)]
        passengers: u32,
        /// Demand tier (defaults to medium).
        #[arg(long)]
        demand: Option<String>,
        /// Tariff JSON file.
        #[arg(long)]
        tariff: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let target = cli.data_dir.as_deref();

    match cli.command {
        Command::Route(options) => handle_route_command(target, cli.format, &options.into()),
        Command::Quote {
            route,
            passengers,
            demand,
            tariff,
        } => {
            let args = QuoteCommandArgs {
                route: route.into(),
                passengers,
                demand,
                tariff,
            };
            handle_quote_command(target, cli.format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
