//! Tariff configuration.
//!
//! A tariff is a plain immutable value, usually loaded from a JSON document:
//!
//! ```json
//! {
//!   "baseRate": 4.5,
//!   "fuelSurcharge": 0.15,
//!   "taxes": 0.12,
//!   "markups": { "Saver": 1.0, "Standard": 1.35, "Flex": 1.8 },
//!   "demandMultipliers": { "low": 0.9, "medium": 1.0, "high": 1.25 },
//!   "minimumFare": 2000
//! }
//! ```
//!
//! Fare classes and demand levels keep their declared order.

use std::fs;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Demand tier used when none is requested or the requested one is unknown.
pub const DEFAULT_DEMAND_LEVEL: &str = "medium";

/// Rates, surcharges, markups and fare floor used to price a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffConfig {
    /// Currency per kilometre.
    pub base_rate: f64,
    /// Fractional fuel surcharge (0.15 = 15%).
    #[serde(default)]
    pub fuel_surcharge: f64,
    /// Fractional taxes (0.12 = 12%).
    #[serde(default)]
    pub taxes: f64,
    /// Fare class name to multiplicative markup, in offer order.
    pub markups: IndexMap<String, f64>,
    /// Demand level name to multiplicative factor.
    #[serde(default)]
    pub demand_multipliers: IndexMap<String, f64>,
    /// Per-passenger floor applied after every other step.
    pub minimum_fare: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            base_rate: 4.5,
            fuel_surcharge: 0.15,
            taxes: 0.12,
            markups: IndexMap::from([
                ("Saver".to_string(), 1.0),
                ("Standard".to_string(), 1.35),
                ("Flex".to_string(), 1.8),
            ]),
            demand_multipliers: IndexMap::from([
                ("low".to_string(), 0.9),
                ("medium".to_string(), 1.0),
                ("high".to_string(), 1.25),
            ]),
            minimum_fare: 2000.0,
        }
    }
}

impl TariffConfig {
    /// Load and validate a tariff from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load and validate a tariff from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let tariff: Self = serde_json::from_reader(reader).map_err(|err| Error::InvalidTariff {
            message: err.to_string(),
        })?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Parse and validate a tariff from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Reject tariffs that cannot produce meaningful fares.
    ///
    /// Negative rates are deliberately not checked here; the fare floor keeps
    /// results non-negative as long as `minimum_fare` is.
    pub fn validate(&self) -> Result<()> {
        if self.markups.is_empty() {
            return Err(Error::invalid_input("tariff must define at least one fare class markup"));
        }

        let scalars = [
            ("baseRate", self.base_rate),
            ("fuelSurcharge", self.fuel_surcharge),
            ("taxes", self.taxes),
            ("minimumFare", self.minimum_fare),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(Error::invalid_input(format!("{name} must be finite")));
            }
        }

        for (class, factor) in &self.markups {
            if !factor.is_finite() {
                return Err(Error::invalid_input(format!(
                    "markup for fare class {class} must be finite"
                )));
            }
        }

        for (level, factor) in &self.demand_multipliers {
            if !factor.is_finite() {
                return Err(Error::invalid_input(format!(
                    "demand multiplier for {level} must be finite"
                )));
            }
        }

        Ok(())
    }

    /// Combined surcharge factor `1 + fuelSurcharge + taxes`.
    pub fn surcharge_factor(&self) -> f64 {
        1.0 + self.fuel_surcharge + self.taxes
    }

    /// Lookup a demand tier by name, ignoring ASCII case.
    pub fn demand_multiplier(&self, level: &str) -> Option<(&str, f64)> {
        if let Some((name, factor)) = self.demand_multipliers.get_key_value(level) {
            return Some((name.as_str(), *factor));
        }
        self.demand_multipliers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(level))
            .map(|(name, factor)| (name.as_str(), *factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declared_order_and_defaults() {
        let tariff = TariffConfig::from_json_str(
            r#"{
                "baseRate": 3.0,
                "markups": {"Flex": 1.8, "Saver": 1.0, "Standard": 1.3},
                "minimumFare": 100
            }"#,
        )
        .expect("valid tariff");

        let classes: Vec<_> = tariff.markups.keys().map(String::as_str).collect();
        assert_eq!(classes, vec!["Flex", "Saver", "Standard"]);
        assert_eq!(tariff.fuel_surcharge, 0.0);
        assert_eq!(tariff.taxes, 0.0);
        assert!(tariff.demand_multipliers.is_empty());
    }

    #[test]
    fn missing_markups_is_invalid_tariff() {
        let error = TariffConfig::from_json_str(r#"{"baseRate": 3.0, "minimumFare": 100}"#)
            .expect_err("markups required");
        assert!(matches!(error, Error::InvalidTariff { .. }));
        assert!(error.to_string().contains("markups"));
    }

    #[test]
    fn empty_markups_is_invalid_input() {
        let error = TariffConfig::from_json_str(
            r#"{"baseRate": 3.0, "markups": {}, "minimumFare": 100}"#,
        )
        .expect_err("empty markups");
        assert!(matches!(error, Error::InvalidInput { .. }));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut tariff = TariffConfig::default();
        tariff.taxes = f64::NAN;
        assert!(tariff.validate().is_err());

        let mut tariff = TariffConfig::default();
        tariff.markups.insert("Broken".to_string(), f64::INFINITY);
        assert!(tariff.validate().is_err());
    }

    #[test]
    fn negative_values_are_left_to_the_caller() {
        let mut tariff = TariffConfig::default();
        tariff.fuel_surcharge = -0.5;
        assert!(tariff.validate().is_ok());
    }

    #[test]
    fn demand_lookup_ignores_case() {
        let tariff = TariffConfig::default();
        assert_eq!(tariff.demand_multiplier("HIGH"), Some(("high", 1.25)));
        assert_eq!(tariff.demand_multiplier("peak"), None);
    }

    #[test]
    fn default_tariff_is_valid_and_serialises_camel_case() {
        let tariff = TariffConfig::default();
        tariff.validate().expect("default tariff valid");
        let json = serde_json::to_value(&tariff).expect("serialise");
        assert_eq!(json["baseRate"], 4.5);
        assert_eq!(json["minimumFare"], 2000.0);
        assert!(json["demandMultipliers"].get("medium").is_some());
    }
}
