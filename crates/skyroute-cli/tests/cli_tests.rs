use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture records present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("skyroute");
    cmd.env("RUST_LOG", "error")
        .env_remove("SKYROUTE_DATA_DIR")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn route_prints_cheapest_path() {
    cli()
        .args(["route", "--from", "LHR", "--to", "FCO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from LHR to FCO (3 legs, algorithm: dijkstra)"))
        .stdout(predicate::str::contains(" | AMS (Schiphol) [371.0 km]"))
        .stdout(predicate::str::contains(" - FCO (Leonardo da Vinci-Fiumicino) [962.0 km]"))
        .stdout(predicate::str::contains("Total distance: 1698.0 km"));
}

#[test]
fn bfs_prefers_fewer_legs() {
    cli()
        .args(["route", "--from", "LHR", "--to", "FCO", "--algorithm", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 legs, algorithm: bfs"))
        .stdout(predicate::str::contains(" | MAD"));
}

#[test]
fn unknown_algorithm_falls_back_to_dijkstra() {
    cli()
        .args(["route", "--from", "LHR", "--to", "DXB", "--algorithm", "teleport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dijkstra"));
}

#[test]
fn json_route_output_is_machine_readable() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "JFK", "--to", "DXB"])
        .args(["--algorithm", "a-star"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(
        value["path"],
        serde_json::json!(["JFK", "LHR", "AMS", "FRA", "DXB"])
    );
    assert_eq!(value["totalDistance"], 11112.0);
    assert_eq!(value["segments"].as_array().map(Vec::len), Some(4));
}

#[test]
fn stationary_route_has_no_legs() {
    cli()
        .args(["route", "--from", "CDG", "--to", "CDG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 legs"))
        .stdout(predicate::str::contains("Total distance: 0.0 km"));
}

#[test]
fn unknown_airport_error_is_friendly() {
    cli()
        .args(["route", "--from", "LHX", "--to", "FCO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown airport 'LHX'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn isolated_airport_reports_no_route() {
    cli()
        .args(["route", "--from", "LHR", "--to", "SYD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found between LHR and SYD"));
}

#[test]
fn quote_lists_every_fare_class() {
    cli()
        .args(["quote", "--from", "LHR", "--to", "FCO", "--passengers", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote for LHR -> AMS -> FRA -> FCO"))
        .stdout(predicate::str::contains("2 passengers"))
        .stdout(predicate::str::contains("9704.07"))
        .stdout(predicate::str::contains("19408.14"))
        .stdout(predicate::str::contains("Flex"))
        .stdout(predicate::str::contains("Cheapest: Saver"));
}

#[test]
fn quote_json_uses_requested_demand() {
    let output = cli()
        .args(["--format", "json", "quote", "--from", "LHR", "--to", "CDG"])
        .args(["--demand", "high"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["route"]["path"], serde_json::json!(["LHR", "CDG"]));
    let offers = value["quote"]["offers"].as_array().expect("offers array");
    assert_eq!(offers.len(), 3);
    assert!(offers.iter().all(|offer| offer["demandLevel"] == "high"));
    // 344 km * 4.5 * 1.27 * 1.25
    assert_eq!(offers[0]["unitPrice"], 2457.45);
}

#[test]
fn quote_reads_custom_tariff() {
    let dir = tempdir().expect("temp dir");
    let tariff = dir.path().join("tariff.json");
    fs::write(
        &tariff,
        r#"{"baseRate": 1.0, "markups": {"Economy": 1.0}, "minimumFare": 0}"#,
    )
    .expect("write tariff");

    cli()
        .args(["quote", "--from", "LHR", "--to", "CDG", "--tariff"])
        .arg(&tariff)
        .assert()
        .success()
        .stdout(predicate::str::contains("Economy"))
        .stdout(predicate::str::contains("344.00"))
        .stdout(predicate::str::contains("Flex").not());
}

#[test]
fn quote_rejects_zero_passengers() {
    cli()
        .args(["quote", "--from", "LHR", "--to", "CDG", "--passengers", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("passenger count must be positive"));
}

#[test]
fn data_dir_can_come_from_environment() {
    let mut cmd = cargo_bin_cmd!("skyroute");
    cmd.env("RUST_LOG", "error")
        .env("SKYROUTE_DATA_DIR", fixtures_dir())
        .args(["route", "--from", "AMS", "--to", "FRA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 365.0 km"));
}

#[test]
fn missing_records_are_reported() {
    let dir = tempdir().expect("temp dir");
    let mut cmd = cargo_bin_cmd!("skyroute");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(dir.path())
        .args(["route", "--from", "AMS", "--to", "FRA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network records"));
}
