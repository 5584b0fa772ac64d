use crate::types::Year;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Population collapse: no adults left to earn a salary in year {year}")]
    PopulationCollapse { year: Year },

    #[error("Cohort count out of range in year {year}")]
    CountOverflow { year: Year },

    #[error("Ledger has no entry for year {year}")]
    LedgerGap { year: Year },

    #[error("Ledger out of sequence: expected year {expected}, got {actual}")]
    LedgerOutOfSequence { expected: Year, actual: Year },

    #[error("Ledger entry for year {year} is already recorded with different values")]
    LedgerConflict { year: Year },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Run halted in year {year}; no further years can be simulated")]
    RunHalted { year: Year },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
