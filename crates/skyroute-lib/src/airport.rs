//! Airport and route records supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Three-letter airport identifier.
pub type AirportCode = String;

/// Airport record. Only `code` and the coordinates matter to the solvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: AirportCode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

impl Airport {
    /// Minimal record with empty display metadata.
    pub fn new(code: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            city: String::new(),
            country: String::new(),
            lat,
            lon,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Directed route record between two airports.
///
/// When `distance_km` is absent the network builder derives it from the
/// great-circle distance between the endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub from: AirportCode,
    pub to: AirportCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Route {
    /// Active route with a declared distance.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km: Some(distance_km),
            active: true,
        }
    }

    /// Active route whose distance is derived from airport coordinates.
    pub fn derived(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_km: None,
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

fn default_active() -> bool {
    true
}
