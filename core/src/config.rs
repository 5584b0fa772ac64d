use crate::{
    error::{SimError, SimResult},
    types::{Count, Year},
};
use serde::{Deserialize, Serialize};

/// Immutable parameters for a single simulation run.
///
/// Passed explicitly to the projector, the advancer and the engine so that
/// independent runs (e.g. a fertility sweep) never share state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Target young population as a percentage of the adult population.
    /// 100 means one young per adult; values above 100 are allowed.
    pub fertility_rate: u32,
    /// Age at which the young become adults.
    pub adulthood_age: Year,
    /// Age at which adults become old.
    pub senior_age: Year,
    /// Age at which the old die. The whole birth cohort dies that year.
    pub longevity: Year,
    /// Total coin in circulation. Never changes during a run.
    pub starting_amount_of_coin: u64,
    // Starting population
    pub young: Count,
    pub adults: Count,
    pub senior: Count,
    /// Number of report rows to produce (years 0 through years-1).
    pub years: Year,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fertility_rate:          100,
            adulthood_age:           20,
            senior_age:              50,
            longevity:               70,
            starting_amount_of_coin: 100_000,
            young:                   0,
            adults:                  100,
            senior:                  0,
            years:                   100,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Fields missing from the file keep their defaults.
    /// The result is not validated; call `validate()` before running.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SimConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.adulthood_age >= self.senior_age {
            return Err(invalid(format!(
                "adulthood_age ({}) must be below senior_age ({})",
                self.adulthood_age, self.senior_age
            )));
        }
        if self.senior_age >= self.longevity {
            return Err(invalid(format!(
                "senior_age ({}) must be below longevity ({})",
                self.senior_age, self.longevity
            )));
        }
        if self.starting_amount_of_coin == 0 {
            return Err(invalid("starting_amount_of_coin must be positive".into()));
        }
        if self.adults <= 0 {
            return Err(invalid(format!("adults must be positive, got {}", self.adults)));
        }
        if self.young < 0 {
            return Err(invalid(format!("young must not be negative, got {}", self.young)));
        }
        if self.senior < 0 {
            return Err(invalid(format!("senior must not be negative, got {}", self.senior)));
        }
        let population = self
            .young
            .checked_add(self.adults)
            .and_then(|p| p.checked_add(self.senior));
        if population.is_none() {
            return Err(invalid("starting population does not fit a 64-bit count".into()));
        }
        if self.years == 0 {
            return Err(invalid("years must be positive".into()));
        }
        Ok(())
    }

    /// Total coin as a float, for salary arithmetic.
    pub fn total_coin(&self) -> f64 {
        self.starting_amount_of_coin as f64
    }

    /// Per-adult share of the coin at year 0. Baseline for `coin_value`.
    pub fn baseline_share(&self) -> f64 {
        self.total_coin() / self.adults as f64
    }
}

fn invalid(reason: String) -> SimError {
    SimError::InvalidConfig { reason }
}
