//! Common test utilities and fixture helpers.
//!
//! The fixtures under `docs/fixtures` describe a small European network with
//! a transatlantic and a Gulf spoke, one isolated airport (SYD), one inactive
//! route (LHR -> FCO), one route with a derived distance (LHR -> MAD), and one
//! route pointing at an unknown airport (FCO -> XXX).

use std::path::PathBuf;

use skyroute_lib::{Airport, NetworkDataset, Route, TariffConfig};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Load the fixture airport and route records.
pub fn fixture_dataset() -> NetworkDataset {
    NetworkDataset::load(&fixtures_dir()).expect("fixture records load")
}

/// Load the fixture tariff.
#[allow(dead_code)]
pub fn fixture_tariff() -> TariffConfig {
    TariffConfig::from_path(&fixtures_dir().join("tariff.json")).expect("fixture tariff loads")
}

/// Three airports one degree apart on the equator with A -> B -> C routes.
#[allow(dead_code)]
pub fn equator_line() -> (Vec<Airport>, Vec<Route>) {
    let airports = vec![
        Airport::new("AAA", 0.0, 0.0),
        Airport::new("BBB", 0.0, 1.0),
        Airport::new("CCC", 0.0, 2.0),
    ];
    let routes = vec![Route::derived("AAA", "BBB"), Route::derived("BBB", "CCC")];
    (airports, routes)
}
