use perc_core::derive_substream_seed;

/// Derives the deterministic seed used for a specific trial.
///
/// Each trial shuffles its own site permutation from an independent
/// substream, so inserting or removing trials never perturbs the
/// permutations of the others.
pub fn trial_seed(master_seed: u64, trial_index: usize) -> u64 {
    derive_substream_seed(master_seed, trial_index as u64)
}
