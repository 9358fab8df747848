use serde::{Deserialize, Serialize};

use perc_core::errors::ErrorInfo;
use perc_core::PercError;

/// Parameters governing a threshold estimation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Side length n of the square grid used in every trial.
    #[serde(default = "default_side")]
    pub side: usize,
    /// Number of independent randomized trials.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Master seed; each trial draws from its own derived substream.
    #[serde(default)]
    pub seed: u64,
}

fn default_side() -> usize {
    20
}

fn default_trials() -> usize {
    30
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            trials: default_trials(),
            seed: 0,
        }
    }
}

impl EstimatorConfig {
    /// Creates a config with explicit side, trials, and seed.
    pub fn new(side: usize, trials: usize, seed: u64) -> Self {
        Self { side, trials, seed }
    }

    /// Rejects degenerate parameters before any trial runs.
    pub fn validate(&self) -> Result<(), PercError> {
        if self.side == 0 {
            return Err(PercError::Argument(
                ErrorInfo::new("estimator-side", "grid side must be positive")
                    .with_context("side", self.side.to_string()),
            ));
        }
        if self.trials == 0 {
            return Err(PercError::Argument(
                ErrorInfo::new("estimator-trials", "trial count must be positive")
                    .with_context("trials", self.trials.to_string())
                    .with_hint("run at least 2 trials for a finite stdev"),
            ));
        }
        Ok(())
    }
}
