use serde::{Deserialize, Serialize};

/// Two-sided 95% normal quantile used for the confidence interval.
const Z_95: f64 = 1.96;

/// Aggregated result of a threshold estimation run.
///
/// The four statistics are derived once from the recorded samples and never
/// mutated afterwards. With a single trial the sample standard deviation is
/// undefined and both it and the interval endpoints are NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    /// Grid side length used for every trial.
    pub side: usize,
    /// Number of trials aggregated.
    pub trials: usize,
    /// Master seed the run was derived from.
    pub seed: u64,
    /// Sample mean of the percolation thresholds.
    pub mean: f64,
    /// Bessel-corrected sample standard deviation.
    pub stdev: f64,
    /// Low endpoint of the 95% confidence interval.
    pub confidence_low: f64,
    /// High endpoint of the 95% confidence interval.
    pub confidence_high: f64,
    /// Per-trial threshold samples, in trial order.
    pub samples: Vec<f64>,
}

impl ThresholdSummary {
    /// Computes the summary statistics from per-trial threshold samples.
    ///
    /// `samples` must be non-empty; the estimator guarantees this by
    /// validating the trial count up front.
    pub fn from_samples(side: usize, seed: u64, samples: Vec<f64>) -> Self {
        let trials = samples.len();
        let mean = samples.iter().sum::<f64>() / trials as f64;
        let sum_sq_deviations: f64 = samples.iter().map(|t| (t - mean) * (t - mean)).sum();
        let stdev = (sum_sq_deviations / (trials as f64 - 1.0)).sqrt();
        let half_width = Z_95 * stdev / (trials as f64).sqrt();
        Self {
            side,
            trials,
            seed,
            mean,
            stdev,
            confidence_low: mean - half_width,
            confidence_high: mean + half_width,
            samples,
        }
    }
}
