//! Skyroute library entry points.
//!
//! This crate turns airport and route records into a routing network, finds
//! least-cost itineraries over it with a selectable search algorithm, and
//! prices the resulting paths against a tariff. Higher-level consumers (the
//! CLI, HTTP front ends) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!
//! Both entry points are pure and synchronous: [`compute_route`] builds a
//! fresh network on every call and [`generate_price_quote`] only reads its
//! arguments, so concurrent callers need no coordination.

pub mod airport;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod graph;
pub mod output;
pub mod path;
pub mod pricing;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use airport::{Airport, AirportCode, Route};
pub use dataset::{load_airports, load_routes, resolve_data_dir, NetworkDataset, RecordFormat};
pub use error::{Error, Result};
pub use geo::{great_circle_distance_km, GeoPoint};
pub use graph::{build_network, Edge, MalformedReason, MalformedRoute, Network};
pub use output::{render_quote_plain, RouteStop, RouteSummary};
pub use path::{find_route_a_star, find_route_bfs, find_route_dijkstra, PathResult, Segment};
pub use pricing::{generate_price_quote, price, Offer, PriceQuote, TariffConfig};
pub use routing::{compute_route, plan_route, solve, RouteAlgorithm, RouteRequest};
