// Each module handles one CLI subcommand; main.rs dispatches to them.

pub mod quote;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use skyroute_lib::{build_network, resolve_data_dir, Error as LibError, Network, NetworkDataset};

/// Resolve the data directory and build the routing network from it.
pub(crate) fn load_network(target: Option<&Path>) -> Result<Network> {
    let data_dir = resolve_data_dir(target).context("failed to resolve the data directory")?;
    let dataset = NetworkDataset::load(&data_dir)
        .with_context(|| format!("failed to load network records from {}", data_dir.display()))?;
    Ok(build_network(&dataset.airports, &dataset.routes))
}

/// Turn routing failures into messages aimed at a terminal user.
pub(crate) fn describe_route_failure(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownAirport { code, suggestions } => {
            anyhow::anyhow!(format_unknown_airport_message(&code, &suggestions))
        }
        LibError::Disconnected {
            origin,
            destination,
        } => anyhow::anyhow!(
            "No route found between {} and {}. Check that active routes connect them.",
            origin,
            destination
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_airport_message(code: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown airport '{}'.", code);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
