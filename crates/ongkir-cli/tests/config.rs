mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn config_defaults_feed_estimate() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "--set-origin", "medan", "--set-destination", "surabaya", "--set-insured", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    let report = env.run_json(&[
        "estimate", "-w", "1", "-l", "10", "--width", "10", "--height", "10",
    ]);
    assert_eq!(report["route"]["origin"], "Medan");
    assert_eq!(report["route"]["destination"], "Surabaya");
    assert_eq!(report["route"]["distance_km"], 1200);
    assert_eq!(report["insured"], true);

    let uninsured = env.run_json(&[
        "estimate", "-w", "1", "-l", "10", "--width", "10", "--height", "10", "--no-insurance",
    ]);
    assert_eq!(uninsured["breakdown"]["insurance_cost"], 0);
}

#[test]
fn config_output_format_is_default() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "--set-output", "json"])
        .assert()
        .success();

    let out = env
        .cmd()
        .args(["estimate", "-w", "2", "-l", "30", "--width", "20", "--height", "10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).expect("json by default");
    assert_eq!(report["breakdown"]["total"], 28860);
}

#[test]
fn config_reset() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "--set-category", "fragile"])
        .assert()
        .success();

    let config = env.run_json(&["config", "--show"]);
    assert_eq!(config["default_category"], "Fragile");

    env.cmd()
        .args(["config", "--reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset to defaults"));

    let config = env.run_json(&["config"]);
    assert_eq!(config["default_category"], "Documents");
    assert_eq!(config["default_origin"], "Jakarta");
    assert_eq!(config["default_destination"], "Bandung");
}
