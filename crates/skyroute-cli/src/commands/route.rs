//! Route command handler for computing itineraries between airports.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use skyroute_lib::{plan_route, Network, PathResult, RouteAlgorithm, RouteRequest, RouteSummary};

use super::{describe_route_failure, load_network};
use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
    /// Algorithm name; unrecognised names fall back to Dijkstra.
    pub algorithm: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.trim(), self.to.trim())
            .with_algorithm(RouteAlgorithm::resolve(&self.algorithm))
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    target: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let network = load_network(target)?;
    let (request, result) = solve_request(&network, args)?;
    let summary = RouteSummary::from_result(&network, request.algorithm, &result);
    print!("{}", format.render_route(&summary)?);
    Ok(())
}

/// Plan the requested route on `network`, mapping failures to user-facing errors.
pub(crate) fn solve_request(
    network: &Network,
    args: &RouteCommandArgs,
) -> Result<(RouteRequest, PathResult)> {
    let request = args.to_request();
    debug!(
        origin = %request.origin,
        destination = %request.destination,
        algorithm = %request.algorithm,
        "planning route"
    );
    let result = plan_route(network, &request).map_err(describe_route_failure)?;
    Ok((request, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroute_lib::{build_network, Airport, Route};

    fn args(algorithm: &str) -> RouteCommandArgs {
        RouteCommandArgs {
            from: " AAA ".to_string(),
            to: "CCC".to_string(),
            algorithm: algorithm.to_string(),
        }
    }

    #[test]
    fn request_trims_codes_and_resolves_algorithm() {
        let request = args("A-Star").to_request();
        assert_eq!(request.origin, "AAA");
        assert_eq!(request.algorithm, RouteAlgorithm::AStar);

        assert_eq!(args("teleport").to_request().algorithm, RouteAlgorithm::Dijkstra);
    }

    #[test]
    fn solve_request_reports_disconnected_airports() {
        let airports = vec![
            Airport::new("AAA", 0.0, 0.0),
            Airport::new("BBB", 0.0, 1.0),
            Airport::new("CCC", 0.0, 2.0),
        ];
        let routes = vec![Route::new("AAA", "BBB", 111.0)];
        let network = build_network(&airports, &routes);

        let err = solve_request(&network, &args("bfs")).expect_err("no route");
        assert!(err.to_string().starts_with("No route found between AAA and CCC"));
    }
}
