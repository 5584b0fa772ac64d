//! The simulation engine — drives the year-by-year fold.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Population projector (records the deltas for the new year)
//!   2. Economy advancer     (consumes those deltas)
//!
//! RULES:
//!   - Each year reads ONLY the prior year's snapshot and the ledger.
//!   - The ledger and snapshot history are append-only.
//!   - The first fatal error halts the run; later steps are refused.
//!   - Every step is recorded in the event log.

use crate::{
    config::SimConfig,
    economy::{EconomyAdvancer, EconomySnapshot},
    error::{SimError, SimResult},
    event::{EventLogEntry, SimEvent},
    ledger::PopulationLedger,
    population::PopulationProjector,
    report::YearRow,
    types::{RunId, Year},
};

pub struct SimEngine {
    pub run_id: RunId,
    config:     SimConfig,
    projector:  PopulationProjector,
    advancer:   EconomyAdvancer,
    ledger:     PopulationLedger,
    current:    EconomySnapshot,
    history:    Vec<EconomySnapshot>,
    event_log:  Vec<EventLogEntry>,
    halted_at:  Option<Year>,
}

impl SimEngine {
    /// Validate the config and seed year 0.
    pub fn new(run_id: RunId, config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let current = EconomySnapshot::initial(&config);
        let mut engine = Self {
            projector: PopulationProjector::new(&config),
            advancer:  EconomyAdvancer::new(&config),
            ledger:    PopulationLedger::seeded(config.adults),
            history:   vec![current.clone()],
            event_log: Vec::new(),
            halted_at: None,
            current,
            config,
            run_id,
        };

        let init_event = SimEvent::RunInitialized {
            run_id: engine.run_id.clone(),
            years:  engine.config.years,
        };
        engine.record(0, "engine", &init_event)?;
        Ok(engine)
    }

    /// Advance one year. This is the core simulation step.
    pub fn step(&mut self) -> SimResult<&EconomySnapshot> {
        if let Some(year) = self.halted_at {
            return Err(SimError::RunHalted { year });
        }

        let year = self.current.year;
        let next_year = year + 1;
        self.record(next_year, "engine", &SimEvent::YearStarted { year: next_year })?;

        let entry = match self.projector.record(
            year,
            self.current.young,
            self.current.adults,
            self.current.old,
            &mut self.ledger,
        ) {
            Ok(entry) => entry,
            Err(e) => return Err(self.halt(next_year, e)),
        };
        self.record(next_year, "population", &SimEvent::PopulationProjected {
            year:      next_year,
            born:      entry.born,
            adulthood: entry.adulthood,
            senior:    entry.senior,
            died:      entry.died,
        })?;

        let snapshot = match self.advancer.advance(
            &self.current,
            &self.ledger,
            self.config.total_coin(),
        ) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                if matches!(e, SimError::PopulationCollapse { .. }) {
                    self.record(next_year, "economy", &SimEvent::PopulationCollapsed {
                        year: next_year,
                    })?;
                }
                return Err(self.halt(next_year, e));
            }
        };
        self.record(next_year, "economy", &SimEvent::EconomyAdvanced {
            year:       snapshot.year,
            young:      snapshot.young,
            adults:     snapshot.adults,
            old:        snapshot.old,
            salary:     snapshot.salary,
            dependent:  snapshot.dependent,
            coin_value: snapshot.coin_value,
        })?;
        self.record(next_year, "engine", &SimEvent::YearCompleted { year: next_year })?;

        self.history.push(snapshot.clone());
        self.current = snapshot;
        Ok(&self.current)
    }

    /// Simulate until the report holds `config.years` rows (years 0..years-1).
    pub fn run(&mut self) -> SimResult<()> {
        log::info!(
            "run {}: simulating {} years (fertility={}%)",
            self.run_id, self.config.years, self.config.fertility_rate
        );
        while (self.history.len() as Year) < self.config.years {
            self.step()?;
        }
        log::info!(
            "run {}: completed at year {} with salary {:.2}",
            self.run_id, self.current.year, self.current.salary
        );
        Ok(())
    }

    /// Run n more years regardless of the configured length.
    pub fn run_years(&mut self, n: Year) -> SimResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn current(&self) -> &EconomySnapshot {
        &self.current
    }

    /// Every snapshot so far, year 0 first.
    pub fn history(&self) -> &[EconomySnapshot] {
        &self.history
    }

    pub fn ledger(&self) -> &PopulationLedger {
        &self.ledger
    }

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }

    /// The year whose computation failed, if the run has halted.
    pub fn halted_at(&self) -> Option<Year> {
        self.halted_at
    }

    /// Snapshots joined with the ledger entry of the same year.
    pub fn rows(&self) -> SimResult<Vec<YearRow>> {
        self.history
            .iter()
            .map(|snapshot| {
                let entry = self.ledger.require(snapshot.year)?;
                Ok(YearRow::new(snapshot.clone(), *entry))
            })
            .collect()
    }

    fn halt(&mut self, year: Year, error: SimError) -> SimError {
        log::error!("run {}: halted in year {year}: {error}", self.run_id);
        self.halted_at = Some(year);
        let event = SimEvent::RunHalted { year, reason: error.to_string() };
        if let Err(e) = self.record(year, "engine", &event) {
            log::warn!("run {}: could not record halt: {e}", self.run_id);
        }
        error
    }

    fn record(&mut self, year: Year, source: &str, event: &SimEvent) -> SimResult<()> {
        self.event_log.push(EventLogEntry {
            run_id:     self.run_id.clone(),
            year,
            source:     source.to_string(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(event)?,
        });
        Ok(())
    }
}
