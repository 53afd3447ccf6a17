//! Route computation entry points.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies (Dijkstra, BFS, A*)
//! - [`RouteRequest`] - Origin/destination query with a chosen algorithm
//! - [`solve`] - Option-returning search over a prebuilt [`Network`]
//! - [`compute_route`] - Build a network from records and solve in one call
//! - [`plan_route`] - `Result` flavour that tells unknown airports apart from
//!   disconnected ones
//!
//! Algorithm names are resolved leniently: anything unrecognised runs
//! Dijkstra and logs a warning.
//!
//! # Example
//!
//! ```
//! use skyroute_lib::{compute_route, Airport, Route};
//!
//! let airports = vec![
//!     Airport::new("AAA", 0.0, 0.0),
//!     Airport::new("BBB", 0.0, 1.0),
//! ];
//! let routes = vec![Route::new("AAA", "BBB", 111.0)];
//! let result = compute_route(&airports, &routes, "AAA", "BBB", "dijkstra").unwrap();
//! assert_eq!(result.path, vec!["AAA", "BBB"]);
//! ```

mod planner;

pub use planner::{select_planner, AStarPlanner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::airport::{Airport, Route};
use crate::error::{Error, Result};
use crate::graph::{build_network, Network};
use crate::path::PathResult;

/// Number of fuzzy suggestions attached to unknown-airport errors.
const MAX_SUGGESTIONS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (least total distance).
    #[default]
    Dijkstra,
    /// Breadth-first search (fewest legs).
    Bfs,
    /// A* search (least total distance, great-circle guided).
    #[serde(rename = "a-star")]
    AStar,
}

impl RouteAlgorithm {
    pub const ALL: [RouteAlgorithm; 3] = [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::Bfs,
        RouteAlgorithm::AStar,
    ];

    /// Parse an algorithm name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Some(RouteAlgorithm::Dijkstra),
            "bfs" | "fewest-hops" => Some(RouteAlgorithm::Bfs),
            "a-star" | "a_star" | "astar" | "a*" => Some(RouteAlgorithm::AStar),
            _ => None,
        }
    }

    /// Parse an algorithm name, falling back to [`RouteAlgorithm::Dijkstra`].
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            warn!(algorithm = name, "unknown routing algorithm; using dijkstra");
            RouteAlgorithm::Dijkstra
        })
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Dijkstra request between two airport codes.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Solve a query on an existing network, selecting the algorithm by name.
///
/// Returns `None` when either code is unknown or the airports are not
/// connected by active routes.
pub fn solve(
    network: &Network,
    origin: &str,
    destination: &str,
    algorithm: &str,
) -> Option<PathResult> {
    let algorithm = RouteAlgorithm::resolve(algorithm);
    debug!(%algorithm, origin, destination, "solving route");
    select_planner(algorithm).find_path(network, origin, destination)
}

/// Build a fresh network from the supplied records and solve a single query.
pub fn compute_route(
    airports: &[Airport],
    routes: &[Route],
    origin: &str,
    destination: &str,
    algorithm: &str,
) -> Option<PathResult> {
    let network = build_network(airports, routes);
    solve(&network, origin, destination, algorithm)
}

/// Plan a route, reporting why no result was produced.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<PathResult> {
    resolve_airport(network, &request.origin)?;
    resolve_airport(network, &request.destination)?;

    select_planner(request.algorithm)
        .find_path(network, &request.origin, &request.destination)
        .ok_or_else(|| Error::Disconnected {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        })
}

fn resolve_airport<'a>(network: &'a Network, code: &str) -> Result<&'a Airport> {
    network.airport(code).ok_or_else(|| Error::UnknownAirport {
        code: code.to_string(),
        suggestions: network.fuzzy_airport_matches(code, MAX_SUGGESTIONS),
    })
}
