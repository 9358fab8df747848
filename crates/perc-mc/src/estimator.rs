use perc_core::{PercError, RngHandle};

use crate::config::EstimatorConfig;
use crate::determinism::trial_seed;
use crate::summary::ThresholdSummary;
use crate::trial::run_trial;

/// Runs the configured number of independent trials and aggregates them.
///
/// Each trial owns a fresh grid and an RNG seeded from its own substream,
/// so trials share no mutable state and the whole run is reproducible from
/// `config.seed`. Validation failures surface before any trial executes and
/// no partial results escape.
pub fn estimate_threshold(config: &EstimatorConfig) -> Result<ThresholdSummary, PercError> {
    config.validate()?;

    let mut samples = Vec::with_capacity(config.trials);
    for trial in 0..config.trials {
        let mut rng = RngHandle::from_seed(trial_seed(config.seed, trial));
        samples.push(run_trial(config.side, &mut rng)?);
    }
    Ok(ThresholdSummary::from_samples(
        config.side,
        config.seed,
        samples,
    ))
}
