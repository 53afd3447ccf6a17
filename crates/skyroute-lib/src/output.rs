use std::fmt::Write;

use serde::Serialize;

use crate::graph::Network;
use crate::path::{PathResult, Segment};
use crate::pricing::PriceQuote;
use crate::routing::RouteAlgorithm;

/// Airport resolved for display alongside a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStop {
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
}

impl RouteStop {
    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}

/// Serialisable route response: `{ path, totalDistance, segments }` plus the
/// algorithm used and resolved stop metadata.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub path: Vec<String>,
    pub total_distance: f64,
    pub segments: Vec<Segment>,
    pub stops: Vec<RouteStop>,
}

impl RouteSummary {
    /// Attach airport metadata from `network` to a solved path.
    pub fn from_result(network: &Network, algorithm: RouteAlgorithm, result: &PathResult) -> Self {
        let stops = result
            .path
            .iter()
            .map(|code| match network.airport(code) {
                Some(airport) => RouteStop {
                    code: airport.code.clone(),
                    name: airport.name.clone(),
                    city: airport.city.clone(),
                    country: airport.country.clone(),
                },
                None => RouteStop {
                    code: code.clone(),
                    name: String::new(),
                    city: String::new(),
                    country: String::new(),
                },
            })
            .collect();

        Self {
            algorithm,
            path: result.path.clone(),
            total_distance: result.total_distance,
            segments: result.segments.clone(),
            stops,
        }
    }

    /// Number of legs in the route.
    pub fn hops(&self) -> usize {
        self.segments.len()
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let origin = self.path.first().map(String::as_str).unwrap_or("?");
        let destination = self.path.last().map(String::as_str).unwrap_or("?");
        let _ = writeln!(
            buffer,
            "Route from {} to {} ({} legs, algorithm: {}):",
            origin,
            destination,
            self.hops(),
            self.algorithm
        );

        for (index, stop) in self.stops.iter().enumerate() {
            let marker = if index == 0 {
                "+"
            } else if index + 1 == self.stops.len() {
                "-"
            } else {
                "|"
            };
            let leg = if index == 0 {
                String::new()
            } else {
                self.segments
                    .get(index - 1)
                    .map(|segment| format!(" [{:.1} km]", segment.distance_km))
                    .unwrap_or_default()
            };
            let _ = writeln!(
                buffer,
                " {marker} {} ({}){leg}",
                stop.code,
                stop.display_name()
            );
        }

        let _ = writeln!(buffer, "Total distance: {:.1} km", self.total_distance);
        buffer
    }
}

/// Render a price quote as a plain-text table.
pub fn render_quote_plain(quote: &PriceQuote) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Quote for {} ({:.1} km, {} passenger{}):",
        quote.route.join(" -> "),
        quote.total_distance,
        quote.passenger_count,
        if quote.passenger_count == 1 { "" } else { "s" }
    );

    let width = quote
        .offers
        .iter()
        .map(|offer| offer.fare_class.len())
        .max()
        .unwrap_or(0);
    for offer in &quote.offers {
        let demand = offer
            .demand_level
            .as_deref()
            .map(|level| format!(" (demand: {level})"))
            .unwrap_or_default();
        let _ = writeln!(
            buffer,
            "  {:<width$}  {:>12.2} each  {:>12.2} total{}",
            offer.fare_class,
            offer.unit_price,
            offer.total_price,
            demand,
            width = width
        );
    }
    buffer
}
