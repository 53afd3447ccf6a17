// Test-only helpers for `skyroute-lib` unit tests
#![allow(dead_code)]

use indexmap::IndexMap;

use crate::airport::{Airport, Route};
use crate::graph::{build_network, Network};
use crate::pricing::TariffConfig;

/// Builder for small airport networks used in tests.
#[derive(Debug, Clone, Default)]
pub struct NetworkFixture {
    airports: Vec<Airport>,
    routes: Vec<Route>,
}

impl NetworkFixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn airport(mut self, code: &str, lat: f64, lon: f64) -> Self {
        self.airports.push(Airport::new(code, lat, lon));
        self
    }

    pub fn named_airport(mut self, code: &str, name: &str, lat: f64, lon: f64) -> Self {
        let mut airport = Airport::new(code, lat, lon);
        airport.name = name.to_string();
        self.airports.push(airport);
        self
    }

    pub fn route(mut self, from: &str, to: &str, distance_km: f64) -> Self {
        self.routes.push(Route::new(from, to, distance_km));
        self
    }

    pub fn derived_route(mut self, from: &str, to: &str) -> Self {
        self.routes.push(Route::derived(from, to));
        self
    }

    pub fn inactive_route(mut self, from: &str, to: &str, distance_km: f64) -> Self {
        self.routes.push(Route::new(from, to, distance_km).inactive());
        self
    }

    pub fn records(self) -> (Vec<Airport>, Vec<Route>) {
        (self.airports, self.routes)
    }

    pub fn build(self) -> Network {
        build_network(&self.airports, &self.routes)
    }
}

/// Tariff from the reference quote: 4.5/km, 15% fuel, 12% taxes, floor 2000.
pub fn reference_tariff() -> TariffConfig {
    TariffConfig {
        base_rate: 4.5,
        fuel_surcharge: 0.15,
        taxes: 0.12,
        markups: IndexMap::from([("Saver".to_string(), 1.0)]),
        demand_multipliers: IndexMap::from([("medium".to_string(), 1.0)]),
        minimum_fare: 2000.0,
    }
}
