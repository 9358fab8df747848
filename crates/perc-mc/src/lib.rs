#![deny(missing_docs)]

//! Monte Carlo estimation of the site percolation threshold.

/// Run configuration and validation.
pub mod config;
/// Deterministic per-trial seed derivation.
pub mod determinism;
/// Trial aggregation entry point.
pub mod estimator;
/// Summary statistics over recorded thresholds.
pub mod summary;
/// Single-trial driver.
pub mod trial;

pub use config::EstimatorConfig;
pub use determinism::trial_seed;
pub use estimator::estimate_threshold;
pub use summary::ThresholdSummary;
pub use trial::{run_trial, site_permutation};
