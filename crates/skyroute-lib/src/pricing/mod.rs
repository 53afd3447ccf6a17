//! Fare derivation for solved paths.
//!
//! Every fare class in the tariff is priced the same way:
//!
//! 1. `base = totalDistance × baseRate`
//! 2. `withSurcharges = base × (1 + fuelSurcharge + taxes)`
//! 3. `withMarkup = withSurcharges × markup[class]`
//! 4. `withDemand = withMarkup × demandMultiplier`
//! 5. `unitPrice = max(withDemand, minimumFare)`
//! 6. `totalPrice = unitPrice × passengerCount`
//!
//! The floor is compared against the unrounded fare, so anything below
//! `minimumFare` comes back as exactly `minimumFare`. Fares above the floor are
//! rounded to cents. `totalPrice` is rounded to cents again after multiplying
//! by the passenger count, so a sub-cent `minimumFare` yields a total that is
//! the rounded product rather than the exact one. Pricing is a pure function
//! of its inputs.

mod tariff;

pub use tariff::{TariffConfig, DEFAULT_DEMAND_LEVEL};

use serde::Serialize;
use tracing::warn;

use crate::airport::AirportCode;
use crate::error::{Error, Result};

/// Priced fare class for a single quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub fare_class: String,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand_level: Option<String>,
}

/// Offers together with the route and tariff that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub route: Vec<AirportCode>,
    pub total_distance: f64,
    pub passenger_count: u32,
    pub tariff: TariffConfig,
    pub offers: Vec<Offer>,
}

impl PriceQuote {
    /// Offer with the lowest unit price; declared order breaks ties.
    pub fn cheapest(&self) -> Option<&Offer> {
        self.offers.iter().fold(None, |best: Option<&Offer>, offer| match best {
            Some(current) if current.unit_price <= offer.unit_price => Some(current),
            _ => Some(offer),
        })
    }
}

/// Price a path for every fare class in the tariff, in declared order.
///
/// `demand_level` selects a demand multiplier; when it is absent or unknown
/// the [`DEFAULT_DEMAND_LEVEL`] tier is used, and when that is not configured
/// either the neutral factor `1.0` applies.
pub fn price(
    path: &[AirportCode],
    total_distance: f64,
    passenger_count: u32,
    tariff: &TariffConfig,
    demand_level: Option<&str>,
) -> Result<Vec<Offer>> {
    if path.is_empty() {
        return Err(Error::invalid_input("path must contain at least one airport"));
    }
    if !total_distance.is_finite() || total_distance < 0.0 {
        return Err(Error::invalid_input(format!(
            "total distance must be a non-negative number, got {total_distance}"
        )));
    }
    if passenger_count == 0 {
        return Err(Error::invalid_input("passenger count must be positive"));
    }
    tariff.validate()?;

    let (tier, demand_factor) = select_demand(tariff, demand_level);
    let with_surcharges = total_distance * tariff.base_rate * tariff.surcharge_factor();

    let offers = tariff
        .markups
        .iter()
        .map(|(fare_class, markup)| {
            let with_demand = with_surcharges * markup * demand_factor;
            let unit_price = if with_demand < tariff.minimum_fare {
                tariff.minimum_fare + 0.0
            } else {
                round_currency(with_demand).max(tariff.minimum_fare) + 0.0
            };
            let total_price = round_currency(unit_price * f64::from(passenger_count));
            Offer {
                fare_class: fare_class.clone(),
                unit_price,
                total_price,
                demand_level: tier.map(str::to_string),
            }
        })
        .collect();

    Ok(offers)
}

/// Price a path and echo the inputs alongside the offers.
pub fn generate_price_quote(
    path: &[AirportCode],
    total_distance: f64,
    passenger_count: u32,
    tariff: &TariffConfig,
    demand_level: Option<&str>,
) -> Result<PriceQuote> {
    let offers = price(path, total_distance, passenger_count, tariff, demand_level)?;
    Ok(PriceQuote {
        route: path.to_vec(),
        total_distance,
        passenger_count,
        tariff: tariff.clone(),
        offers,
    })
}

fn select_demand<'a>(
    tariff: &'a TariffConfig,
    requested: Option<&str>,
) -> (Option<&'a str>, f64) {
    if let Some(level) = requested {
        if let Some((name, factor)) = tariff.demand_multiplier(level) {
            return (Some(name), factor);
        }
        warn!(
            demand_level = level,
            fallback = DEFAULT_DEMAND_LEVEL,
            "unknown demand level"
        );
    }

    match tariff.demand_multiplier(DEFAULT_DEMAND_LEVEL) {
        Some((name, factor)) => (Some(name), factor),
        None => (None, 1.0),
    }
}

/// Round to cents, half away from zero.
fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0 + 0.0
}
