//! Economy advancer — cohort counts and salary metrics for the next year.
//!
//! Runs SECOND every year, after the population projector has recorded
//! the deltas for the new year. The coin supply is fixed; only its split
//! across adults changes.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    ledger::PopulationLedger,
    types::{Count, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomySnapshot {
    pub year:       Year,
    pub young:      Count,
    pub adults:     Count,
    pub old:        Count,
    /// Coin paid to each adult this year.
    pub salary:     f64,
    /// Dependents (young + old) per adult.
    pub dependent:  f64,
    /// Year-0 per-adult share divided by the current salary.
    pub coin_value: f64,
}

impl EconomySnapshot {
    /// The year-0 state. `dependent` is seeded at 1.0 regardless of the
    /// starting cohorts, matching the reference output.
    pub fn initial(config: &SimConfig) -> Self {
        Self {
            year:       0,
            young:      config.young,
            adults:     config.adults,
            old:        config.senior,
            salary:     config.baseline_share(),
            dependent:  1.0,
            coin_value: 1.0,
        }
    }

    /// Total headcount. `None` if it does not fit a `Count`; snapshots
    /// produced by the advancer always fit.
    pub fn population(&self) -> Option<Count> {
        self.young.checked_add(self.adults)?.checked_add(self.old)
    }
}

#[derive(Debug, Clone)]
pub struct EconomyAdvancer {
    initial_adults: Count,
}

impl EconomyAdvancer {
    pub fn new(config: &SimConfig) -> Self {
        Self { initial_adults: config.adults }
    }

    /// Produce the snapshot for `previous.year + 1` from the ledger entry
    /// recorded for that year.
    pub fn advance(
        &self,
        previous: &EconomySnapshot,
        ledger: &PopulationLedger,
        total_coin_amount: f64,
    ) -> SimResult<EconomySnapshot> {
        let year = previous.year + 1;
        let entry = ledger.require(year)?;

        let young = shift(previous.young, entry.born, entry.adulthood, year)?;
        let adults = shift(previous.adults, entry.adulthood, entry.senior, year)?;
        let old = shift(previous.old, entry.senior, entry.died, year)?;
        let dependents = young
            .checked_add(old)
            .filter(|d| d.checked_add(adults).is_some())
            .ok_or(SimError::CountOverflow { year })?;

        let salary = salary(adults, total_coin_amount, year)?;
        let dependent = dependents as f64 / adults as f64;
        let coin_value = (total_coin_amount / self.initial_adults as f64) / salary;

        log::debug!(
            "year={year} economy: young={young} adults={adults} old={old} \
             salary={salary:.2} dependent={dependent:.2} coin_value={coin_value:.2}"
        );

        Ok(EconomySnapshot { year, young, adults, old, salary, dependent, coin_value })
    }
}

/// `count + inflow - outflow`, failing instead of wrapping.
fn shift(count: Count, inflow: Count, outflow: Count, year: Year) -> SimResult<Count> {
    count
        .checked_add(inflow)
        .and_then(|c| c.checked_sub(outflow))
        .ok_or(SimError::CountOverflow { year })
}

/// Split the coin supply equally between the adults.
/// Fails instead of dividing by a non-positive headcount.
pub fn salary(adults: Count, total_coin_amount: f64, year: Year) -> SimResult<f64> {
    if adults <= 0 {
        return Err(SimError::PopulationCollapse { year });
    }
    Ok(total_coin_amount / adults as f64)
}
