//! Population projector — births, ageing and deaths for one year.
//!
//! Runs FIRST every year. Reads the cohort counts at the start of `year`
//! and the birth history, and records the deltas for `year + 1`.
//! The economy advancer consumes that entry; it never computes deltas.

use crate::{
    config::SimConfig,
    error::{SimError, SimResult},
    ledger::{LedgerEntry, PopulationLedger},
    types::{Count, Year},
};

#[derive(Debug, Clone)]
pub struct PopulationProjector {
    fertility_rate: u32,
    adulthood_age:  Year,
    senior_age:     Year,
    longevity:      Year,
}

impl PopulationProjector {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            fertility_rate: config.fertility_rate,
            adulthood_age:  config.adulthood_age,
            senior_age:     config.senior_age,
            longevity:      config.longevity,
        }
    }

    /// Young population the adults of this year aim for.
    /// Rounds half to even. `None` when the target does not fit a `Count`.
    pub fn target_young(&self, adults: Count) -> Option<Count> {
        let target = (adults as f64 * (self.fertility_rate as f64 / 100.0)).round_ties_even();
        // Count::MAX as f64 rounds up to 2^63, which is itself out of range.
        if !target.is_finite() || target < Count::MIN as f64 || target >= Count::MAX as f64 {
            return None;
        }
        Some(target as Count)
    }

    /// Compute the entry for `year + 1` without touching the ledger.
    ///
    /// `old` does not influence the result; the old cohort only shrinks
    /// through the death lookback.
    pub fn project(
        &self,
        year: Year,
        young: Count,
        adults: Count,
        _old: Count,
        ledger: &PopulationLedger,
    ) -> SimResult<LedgerEntry> {
        let overflow = SimError::CountOverflow { year: year + 1 };
        // Births only top the young cohort up; a surplus is not removed here.
        let born = self
            .target_young(adults)
            .and_then(|target| target.checked_sub(young))
            .ok_or(overflow)?
            .max(0);

        Ok(LedgerEntry {
            born,
            adulthood: ledger.born_years_before(year, self.adulthood_age)?,
            senior:    ledger.born_years_before(year, self.senior_age)?,
            died:      ledger.born_years_before(year, self.longevity)?,
        })
    }

    /// Project and append the entry for `year + 1`.
    ///
    /// Repeating the call for a year already recorded returns the stored
    /// entry when it matches, and fails with `LedgerConflict` otherwise.
    pub fn record(
        &self,
        year: Year,
        young: Count,
        adults: Count,
        old: Count,
        ledger: &mut PopulationLedger,
    ) -> SimResult<LedgerEntry> {
        let target_year = year + 1;
        if ledger.latest_year().is_none_or(|latest| latest < year) {
            return Err(SimError::LedgerOutOfSequence {
                expected: ledger.next_year(),
                actual:   target_year,
            });
        }

        let entry = self.project(year, young, adults, old, ledger)?;

        if let Some(existing) = ledger.entry(target_year) {
            if *existing != entry {
                return Err(SimError::LedgerConflict { year: target_year });
            }
            return Ok(entry);
        }

        ledger.append(target_year, entry)?;
        log::debug!(
            "year={target_year} population: born={} adulthood={} senior={} died={}",
            entry.born, entry.adulthood, entry.senior, entry.died
        );
        Ok(entry)
    }
}
