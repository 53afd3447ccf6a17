//! Quote command handler: plan a route and price it against a tariff.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use skyroute_lib::{generate_price_quote, RouteSummary, TariffConfig};

use super::load_network;
use super::route::{solve_request, RouteCommandArgs};
use crate::output::OutputFormat;

/// Arguments for the quote command.
#[derive(Debug, Clone)]
pub struct QuoteCommandArgs {
    pub route: RouteCommandArgs,
    /// Number of passengers travelling together.
    pub passengers: u32,
    /// Demand tier, e.g. `low`, `medium` or `high`.
    pub demand: Option<String>,
    /// Tariff JSON file; the built-in tariff is used when absent.
    pub tariff: Option<PathBuf>,
}

/// Handle the quote subcommand.
pub fn handle_quote_command(
    target: Option<&Path>,
    format: OutputFormat,
    args: &QuoteCommandArgs,
) -> Result<()> {
    let tariff = load_tariff(args.tariff.as_deref())?;
    let network = load_network(target)?;
    let (request, result) = solve_request(&network, &args.route)?;

    let quote = generate_price_quote(
        &result.path,
        result.total_distance,
        args.passengers,
        &tariff,
        args.demand.as_deref(),
    )
    .context("failed to price route")?;

    let summary = RouteSummary::from_result(&network, request.algorithm, &result);
    print!("{}", format.render_quote(&summary, &quote)?);
    Ok(())
}

fn load_tariff(path: Option<&Path>) -> Result<TariffConfig> {
    match path {
        Some(path) => TariffConfig::from_path(path)
            .with_context(|| format!("failed to load tariff from {}", path.display())),
        None => {
            info!("no tariff file given; using built-in tariff");
            Ok(TariffConfig::default())
        }
    }
}
