//! The event log — a serialized trace of every step the engine takes.
//!
//! RULE: Events are recorded in execution order and never rewritten.
//! Two runs with the same config must produce identical logs.

use crate::types::{Count, RunId, Year};
use serde::{Deserialize, Serialize};

/// Every event emitted during simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    // ── Engine events ──────────────────────────────
    RunInitialized {
        run_id: RunId,
        years:  Year,
    },
    YearStarted {
        year: Year,
    },
    YearCompleted {
        year: Year,
    },
    RunHalted {
        year:   Year,
        reason: String,
    },

    // ── Population events ──────────────────────────
    PopulationProjected {
        year:      Year,
        born:      Count,
        adulthood: Count,
        senior:    Count,
        died:      Count,
    },
    PopulationCollapsed {
        year: Year,
    },

    // ── Economy events ─────────────────────────────
    EconomyAdvanced {
        year:       Year,
        young:      Count,
        adults:     Count,
        old:        Count,
        salary:     f64,
        dependent:  f64,
        coin_value: f64,
    },
}

impl SimEvent {
    /// Stable string name of the variant, stored alongside the payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            SimEvent::RunInitialized { .. }      => "run_initialized",
            SimEvent::YearStarted { .. }         => "year_started",
            SimEvent::YearCompleted { .. }       => "year_completed",
            SimEvent::RunHalted { .. }           => "run_halted",
            SimEvent::PopulationProjected { .. } => "population_projected",
            SimEvent::PopulationCollapsed { .. } => "population_collapsed",
            SimEvent::EconomyAdvanced { .. }     => "economy_advanced",
        }
    }
}

/// One recorded event as kept by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub run_id:     RunId,
    pub year:       Year,
    pub source:     String,
    pub event_type: String,
    pub payload:    String, // JSON-serialized SimEvent
}
