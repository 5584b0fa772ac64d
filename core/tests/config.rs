//! Configuration loading and validation tests.

use cohort_core::{config::SimConfig, error::SimError};
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cohort-core-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn load_reads_json_and_fills_defaults() {
    let path = temp_file("partial.json", r#"{ "fertility_rate": 120, "years": 40 }"#);

    let config = SimConfig::load(path.to_str().unwrap()).unwrap();

    assert_eq!(config.fertility_rate, 120);
    assert_eq!(config.years, 40);
    assert_eq!(config.adulthood_age, 20);
    assert_eq!(config.starting_amount_of_coin, 100_000);
    let _ = std::fs::remove_file(path);
}

#[test]
fn shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/economy.json");
    assert_eq!(SimConfig::load(path).unwrap(), SimConfig::default());
}

#[test]
fn missing_file_error_names_the_path() {
    let err = SimConfig::load("/nonexistent/economy.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/economy.json"), "got: {err}");
}

#[test]
fn malformed_json_is_an_error() {
    let path = temp_file("broken.json", "{ fertility_rate: ");
    assert!(SimConfig::load(path.to_str().unwrap()).is_err());
    let _ = std::fs::remove_file(path);
}

#[test]
fn ages_must_increase() {
    let cases = [
        SimConfig { adulthood_age: 50, ..SimConfig::default() },
        SimConfig { senior_age: 70, ..SimConfig::default() },
        SimConfig { longevity: 40, ..SimConfig::default() },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(SimError::InvalidConfig { .. })),
            "accepted {config:?}"
        );
    }
}

#[test]
fn counts_and_coin_are_checked() {
    let cases = [
        SimConfig { adults: 0, ..SimConfig::default() },
        SimConfig { young: -1, ..SimConfig::default() },
        SimConfig { senior: -5, ..SimConfig::default() },
        SimConfig { starting_amount_of_coin: 0, ..SimConfig::default() },
        SimConfig { years: 0, ..SimConfig::default() },
        SimConfig { young: i64::MAX, ..SimConfig::default() },
    ];
    for config in cases {
        assert!(config.validate().is_err(), "accepted {config:?}");
    }
}
