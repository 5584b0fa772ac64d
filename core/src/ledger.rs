//! Population history ledger — the append-only record of demographic deltas.
//!
//! RULE: An entry is written once per year and never changed afterwards.
//! The vector index is the year, so the ledger cannot hold holes or
//! out-of-order entries.

use crate::{
    error::{SimError, SimResult},
    types::{Count, Year},
};
use serde::{Deserialize, Serialize};

/// Demographic movement recorded for a single year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Young born this year.
    pub born:      Count,
    /// Young who became adults this year.
    pub adulthood: Count,
    /// Adults who became old this year.
    pub senior:    Count,
    /// Old who died this year.
    pub died:      Count,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationLedger {
    entries: Vec<LedgerEntry>,
}

impl PopulationLedger {
    /// A ledger holding only the synthetic year-0 entry: the starting adults
    /// are recorded as if they all came of age at year 0.
    pub fn seeded(initial_adults: Count) -> Self {
        Self {
            entries: vec![LedgerEntry {
                born:      0,
                adulthood: initial_adults,
                senior:    0,
                died:      0,
            }],
        }
    }

    /// The year the next appended entry must carry.
    pub fn next_year(&self) -> Year {
        self.entries.len() as Year
    }

    pub fn latest_year(&self) -> Option<Year> {
        self.next_year().checked_sub(1)
    }

    pub fn entry(&self, year: Year) -> Option<&LedgerEntry> {
        self.entries.get(year as usize)
    }

    pub fn require(&self, year: Year) -> SimResult<&LedgerEntry> {
        self.entry(year).ok_or(SimError::LedgerGap { year })
    }

    /// Births recorded `age` years before `year`.
    /// Zero when that year would fall before year 0.
    pub fn born_years_before(&self, year: Year, age: Year) -> SimResult<Count> {
        match year.checked_sub(age) {
            None => Ok(0),
            Some(origin) => Ok(self.require(origin)?.born),
        }
    }

    pub fn append(&mut self, year: Year, entry: LedgerEntry) -> SimResult<()> {
        let expected = self.next_year();
        if year != expected {
            return Err(SimError::LedgerOutOfSequence { expected, actual: year });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their year, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (Year, &LedgerEntry)> {
        self.entries.iter().enumerate().map(|(y, e)| (y as Year, e))
    }
}
