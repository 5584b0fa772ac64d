//! Economy advancer tests — cohort arithmetic, salary and collapse.

use cohort_core::{
    config::SimConfig,
    economy::{salary, EconomyAdvancer, EconomySnapshot},
    error::SimError,
    ledger::{LedgerEntry, PopulationLedger},
};

const TOTAL_COIN: f64 = 100_000.0;

fn ledger_with_year_one(entry: LedgerEntry) -> PopulationLedger {
    let mut ledger = PopulationLedger::seeded(100);
    ledger.append(1, entry).unwrap();
    ledger
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn initial_snapshot_matches_config() {
    let snapshot = EconomySnapshot::initial(&SimConfig::default());

    assert_eq!(snapshot.year, 0);
    assert_eq!((snapshot.young, snapshot.adults, snapshot.old), (0, 100, 0));
    assert_eq!(snapshot.salary, 1000.0);
    assert_eq!(snapshot.dependent, 1.0);
    assert_eq!(snapshot.coin_value, 1.0);
}

#[test]
fn dependent_is_seeded_regardless_of_starting_cohorts() {
    let config = SimConfig { young: 40, senior: 20, ..SimConfig::default() };
    assert_eq!(EconomySnapshot::initial(&config).dependent, 1.0);
}

#[test]
fn births_flow_into_young_cohort() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let ledger = ledger_with_year_one(LedgerEntry { born: 100, ..LedgerEntry::default() });

    let next = advancer
        .advance(&EconomySnapshot::initial(&config), &ledger, TOTAL_COIN)
        .unwrap();

    assert_eq!(next.year, 1);
    assert_eq!((next.young, next.adults, next.old), (100, 100, 0));
    assert_eq!(next.salary, 1000.0);
    assert_eq!(next.dependent, 1.0);
    assert_eq!(next.coin_value, 1.0);
}

#[test]
fn all_transitions_applied_together() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let previous = EconomySnapshot {
        young: 50,
        old: 30,
        ..EconomySnapshot::initial(&config)
    };
    let ledger = ledger_with_year_one(LedgerEntry {
        born:      10,
        adulthood: 20,
        senior:    5,
        died:      3,
    });

    let next = advancer.advance(&previous, &ledger, TOTAL_COIN).unwrap();

    assert_eq!((next.young, next.adults, next.old), (40, 115, 32));
    assert_close(next.salary, TOTAL_COIN / 115.0, "salary");
    assert_close(next.dependent, 72.0 / 115.0, "dependent");
    assert_close(next.coin_value, 1.15, "coin_value");
    assert_close(next.salary * next.adults as f64, TOTAL_COIN, "coin supply");
}

#[test]
fn losing_every_adult_is_a_population_collapse() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let ledger = ledger_with_year_one(LedgerEntry { senior: 100, ..LedgerEntry::default() });

    let result = advancer.advance(&EconomySnapshot::initial(&config), &ledger, TOTAL_COIN);

    assert!(
        matches!(result, Err(SimError::PopulationCollapse { year: 1 })),
        "expected collapse, got {result:?}"
    );
}

#[test]
fn negative_adult_count_is_also_a_collapse() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let ledger = ledger_with_year_one(LedgerEntry { senior: 130, ..LedgerEntry::default() });

    let result = advancer.advance(&EconomySnapshot::initial(&config), &ledger, TOTAL_COIN);

    assert!(matches!(result, Err(SimError::PopulationCollapse { year: 1 })));
}

#[test]
fn advancing_without_a_ledger_entry_fails() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let ledger = PopulationLedger::seeded(100);

    let result = advancer.advance(&EconomySnapshot::initial(&config), &ledger, TOTAL_COIN);

    assert!(matches!(result, Err(SimError::LedgerGap { year: 1 })));
}

#[test]
fn salary_splits_coin_between_adults() {
    assert_eq!(salary(200, TOTAL_COIN, 3).unwrap(), 500.0);
    assert!(matches!(salary(0, TOTAL_COIN, 3), Err(SimError::PopulationCollapse { year: 3 })));
}

#[test]
fn count_overflow_is_reported_not_wrapped() {
    let config = SimConfig::default();
    let advancer = EconomyAdvancer::new(&config);
    let previous = EconomySnapshot {
        young: i64::MAX,
        ..EconomySnapshot::initial(&config)
    };
    let ledger = ledger_with_year_one(LedgerEntry { born: 1, ..LedgerEntry::default() });

    let result = advancer.advance(&previous, &ledger, TOTAL_COIN);

    assert!(matches!(result, Err(SimError::CountOverflow { year: 1 })));
}

#[test]
fn population_total_reports_overflow() {
    let snapshot = EconomySnapshot {
        young: i64::MAX,
        ..EconomySnapshot::initial(&SimConfig::default())
    };
    assert_eq!(snapshot.population(), None);
    assert_eq!(EconomySnapshot::initial(&SimConfig::default()).population(), Some(100));
}
