//! Parameter sweeps — many independent runs in parallel.
//!
//! Each run builds its own engine, so runs share nothing mutable.
//! Outcomes come back in the order the configs were given.

use crate::{
    config::SimConfig,
    engine::SimEngine,
    error::SimError,
    report::RunSummary,
    types::RunId,
};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug)]
pub struct SweepOutcome {
    pub run_id:  RunId,
    pub config:  SimConfig,
    /// Summary of the years simulated. Present for halted runs too;
    /// absent only when the engine could not be built.
    pub summary: Option<RunSummary>,
    pub error:   Option<SimError>,
}

impl SweepOutcome {
    pub fn completed(&self) -> bool {
        self.error.is_none()
    }
}

/// Serializable view of a `SweepOutcome`; the error is kept as its message.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    pub run_id:         RunId,
    pub fertility_rate: u32,
    pub summary:        Option<RunSummary>,
    pub error:          Option<String>,
}

impl From<&SweepOutcome> for SweepRecord {
    fn from(outcome: &SweepOutcome) -> Self {
        Self {
            run_id:         outcome.run_id.clone(),
            fertility_rate: outcome.config.fertility_rate,
            summary:        outcome.summary.clone(),
            error:          outcome.error.as_ref().map(|e| e.to_string()),
        }
    }
}

/// Run every config to completion (or its first fatal error).
pub fn run_sweep(label: &str, configs: Vec<SimConfig>) -> Vec<SweepOutcome> {
    log::info!("sweep {label}: {} runs", configs.len());
    configs
        .into_par_iter()
        .enumerate()
        .map(|(i, config)| run_one(format!("{label}-{i}"), config))
        .collect()
}

/// Copies of `base` differing only in fertility rate.
pub fn fertility_variants(base: &SimConfig, rates: &[u32]) -> Vec<SimConfig> {
    rates
        .iter()
        .map(|&fertility_rate| SimConfig { fertility_rate, ..base.clone() })
        .collect()
}

fn run_one(run_id: RunId, config: SimConfig) -> SweepOutcome {
    let mut engine = match SimEngine::new(run_id.clone(), config.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            log::warn!("sweep run {run_id}: rejected: {e}");
            return SweepOutcome { run_id, config, summary: None, error: Some(e) };
        }
    };
    let error = engine.run().err();
    SweepOutcome {
        summary: RunSummary::from_history(engine.history()),
        run_id,
        config,
        error,
    }
}
