use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::airport::{Airport, AirportCode, Route};

/// Minimum Jaro-Winkler similarity for a code or name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Directed edge within the routing network.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: AirportCode,
    pub distance: f64,
}

/// Why a route record was left out of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    UnknownOrigin,
    UnknownDestination,
    UnknownEndpoints,
    InvalidDistance,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MalformedReason::UnknownOrigin => "unknown origin airport",
            MalformedReason::UnknownDestination => "unknown destination airport",
            MalformedReason::UnknownEndpoints => "unknown origin and destination airports",
            MalformedReason::InvalidDistance => "negative or non-finite distance",
        };
        f.write_str(value)
    }
}

/// Diagnostic for a route excluded while building the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MalformedRoute {
    pub from: AirportCode,
    pub to: AirportCode,
    pub reason: MalformedReason,
}

/// Transient routing network built from airport and route records.
#[derive(Debug, Clone)]
pub struct Network {
    airports: HashMap<AirportCode, Airport>,
    adjacency: HashMap<AirportCode, Vec<Edge>>,
    dropped: Vec<MalformedRoute>,
    duplicates: Vec<AirportCode>,
    edge_count: usize,
    heuristic_scale: f64,
}

impl Network {
    /// Lookup an airport by its code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Outgoing edges for an airport, in route-record order.
    pub fn neighbours(&self, code: &str) -> &[Edge] {
        self.adjacency
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Routes excluded because they referenced unknown airports or carried
    /// an unusable distance.
    pub fn dropped_routes(&self) -> &[MalformedRoute] {
        &self.dropped
    }

    /// Airport codes that appeared more than once; the first record was kept.
    pub fn duplicate_airports(&self) -> &[AirportCode] {
        &self.duplicates
    }

    /// Largest factor `k <= 1` with `k * great_circle(from, to) <= distance`
    /// for every edge. Scaling the great-circle heuristic by it keeps A*
    /// exact even when declared distances undercut the geodesic.
    pub fn heuristic_scale(&self) -> f64 {
        self.heuristic_scale
    }

    /// Great-circle distance between two airports, if both are known and
    /// have finite coordinates.
    pub fn great_circle_km(&self, from: &str, to: &str) -> Option<f64> {
        let a = self.airports.get(from)?;
        let b = self.airports.get(to)?;
        Some(a.position().distance_to(&b.position())).filter(|distance| distance.is_finite())
    }

    /// Suggest airport codes resembling `query`, best match first.
    ///
    /// Both codes and display names are compared case-insensitively.
    pub fn fuzzy_airport_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .airports
            .values()
            .filter_map(|airport| {
                let by_code = strsim::jaro_winkler(&needle, &airport.code.to_ascii_uppercase());
                let by_name = if airport.name.is_empty() {
                    0.0
                } else {
                    strsim::jaro_winkler(&needle, &airport.name.to_ascii_uppercase())
                };
                let score = by_code.max(by_name);
                (score >= SUGGESTION_THRESHOLD).then_some((score, airport.code.as_str()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}

/// Build the routing network for a single computation.
///
/// Inactive routes are skipped silently. Routes naming unknown airports or
/// carrying a negative/non-finite distance (declared, or derived from
/// non-finite coordinates) are collected in
/// [`Network::dropped_routes`] instead of failing the build. Parallel edges
/// and self-loops are retained as given.
pub fn build_network(airports: &[Airport], routes: &[Route]) -> Network {
    let mut index: HashMap<AirportCode, Airport> = HashMap::with_capacity(airports.len());
    let mut adjacency: HashMap<AirportCode, Vec<Edge>> = HashMap::with_capacity(airports.len());
    let mut duplicates = Vec::new();

    for airport in airports {
        if index.contains_key(&airport.code) {
            warn!(code = %airport.code, "duplicate airport record ignored");
            duplicates.push(airport.code.clone());
            continue;
        }
        adjacency.insert(airport.code.clone(), Vec::new());
        index.insert(airport.code.clone(), airport.clone());
    }

    let mut dropped = Vec::new();
    let mut edge_count = 0usize;
    let mut heuristic_scale = 1.0_f64;
    let mut inactive = 0usize;

    for route in routes {
        if !route.active {
            inactive += 1;
            continue;
        }

        let (origin, destination) = match (index.get(&route.from), index.get(&route.to)) {
            (Some(origin), Some(destination)) => (origin, destination),
            (origin, destination) => {
                let reason = match (origin.is_some(), destination.is_some()) {
                    (false, false) => MalformedReason::UnknownEndpoints,
                    (false, true) => MalformedReason::UnknownOrigin,
                    _ => MalformedReason::UnknownDestination,
                };
                dropped.push(malformed(route, reason));
                continue;
            }
        };

        let great_circle = origin.position().distance_to(&destination.position());
        let distance = match route.distance_km {
            Some(declared) if declared.is_finite() && declared >= 0.0 => declared,
            Some(_) => {
                dropped.push(malformed(route, MalformedReason::InvalidDistance));
                continue;
            }
            None if great_circle.is_finite() => great_circle,
            None => {
                dropped.push(malformed(route, MalformedReason::InvalidDistance));
                continue;
            }
        };
        // Adding +0.0 turns a -0.0 weight into +0.0.
        let distance = distance + 0.0;

        if great_circle > 0.0 {
            heuristic_scale = heuristic_scale.min(distance / great_circle);
        }

        if let Some(edges) = adjacency.get_mut(&route.from) {
            edges.push(Edge {
                target: route.to.clone(),
                distance,
            });
            edge_count += 1;
        }
    }

    debug!(
        airports = index.len(),
        edges = edge_count,
        inactive,
        dropped = dropped.len(),
        "built routing network"
    );

    Network {
        airports: index,
        adjacency,
        dropped,
        duplicates,
        edge_count,
        heuristic_scale,
    }
}

fn malformed(route: &Route, reason: MalformedReason) -> MalformedRoute {
    warn!(from = %route.from, to = %route.to, %reason, "route excluded from network");
    MalformedRoute {
        from: route.from.clone(),
        to: route.to.clone(),
        reason,
    }
}
