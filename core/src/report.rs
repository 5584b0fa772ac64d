//! Yearly report rows and their table/JSON renderings.
//!
//! The report is a presentation layer only. It reads snapshots and ledger
//! entries and never feeds anything back into the simulation.

use crate::{
    config::SimConfig,
    economy::EconomySnapshot,
    ledger::LedgerEntry,
    types::{Count, RunId, Year},
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const COLUMN_WIDTH: usize = 10;

pub const HEADERS: [&str; 11] = [
    "Year", "Young", "Adults", "Old", "Salary", "Dependent", "Coin value",
    "Born", "Adulthood", "Senior", "Died",
];

/// A snapshot together with the ledger entry of the same year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    #[serde(flatten)]
    pub snapshot: EconomySnapshot,
    #[serde(flatten)]
    pub entry:    LedgerEntry,
}

impl YearRow {
    pub fn new(snapshot: EconomySnapshot, entry: LedgerEntry) -> Self {
        Self { snapshot, entry }
    }

    /// One fixed-width line. Year 0 prints its seeded ratios unrounded.
    pub fn render(&self) -> String {
        let s = &self.snapshot;
        let (salary, dependent, coin_value) = if s.year == 0 {
            (format!("{:?}", s.salary), format!("{:?}", s.dependent), format!("{:?}", s.coin_value))
        } else {
            (format!("{:.2}", s.salary), format!("{:.2}", s.dependent), format!("{:.2}", s.coin_value))
        };
        let cells = [
            s.year.to_string(),
            s.young.to_string(),
            s.adults.to_string(),
            s.old.to_string(),
            salary,
            dependent,
            coin_value,
            self.entry.born.to_string(),
            self.entry.adulthood.to_string(),
            self.entry.senior.to_string(),
            self.entry.died.to_string(),
        ];
        pad_cells(cells.iter().map(String::as_str))
    }
}

pub fn render_header() -> String {
    pad_cells(HEADERS.iter().copied())
}

/// Header plus one line per row, newline terminated.
pub fn render_table(rows: &[YearRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_header());
    for row in rows {
        let _ = writeln!(out, "{}", row.render());
    }
    out
}

fn pad_cells<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.fold(String::new(), |mut line, cell| {
        let _ = write!(line, "{:<width$}", cell, width = COLUMN_WIDTH);
        line
    })
}

/// Full run output for machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id:    RunId,
    pub config:    SimConfig,
    pub rows:      Vec<YearRow>,
    /// Year in which the run halted, if it did not complete.
    pub halted_at: Option<Year>,
}

/// Headline figures for a run, used by the runner and by sweeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_year:      Year,
    pub final_adults:    Count,
    pub final_salary:    f64,
    pub min_salary:      f64,
    pub max_salary:      f64,
    pub peak_dependent:  f64,
    pub peak_population: Count,
}

impl RunSummary {
    /// `None` for an empty history.
    pub fn from_history(history: &[EconomySnapshot]) -> Option<Self> {
        let last = history.last()?;
        let mut summary = Self {
            final_year:      last.year,
            final_adults:    last.adults,
            final_salary:    last.salary,
            min_salary:      f64::INFINITY,
            max_salary:      f64::NEG_INFINITY,
            peak_dependent:  f64::NEG_INFINITY,
            peak_population: 0,
        };
        for s in history {
            summary.min_salary = summary.min_salary.min(s.salary);
            summary.max_salary = summary.max_salary.max(s.salary);
            summary.peak_dependent = summary.peak_dependent.max(s.dependent);
            let population = s.population().unwrap_or(Count::MAX);
            summary.peak_population = summary.peak_population.max(population);
        }
        Some(summary)
    }
}
