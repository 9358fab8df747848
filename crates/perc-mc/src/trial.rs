use rand::seq::SliceRandom;

use perc_core::{PercError, RngHandle, Site};
use perc_lattice::PercolationGrid;

/// Runs one randomized percolation trial on a fresh n-by-n grid.
///
/// Sites are opened one at a time in a uniformly random order until the
/// grid percolates; the returned sample is the fraction of sites open at
/// that moment. A fully open grid always percolates, so the permutation is
/// never exhausted without a result.
pub fn run_trial(side: usize, rng: &mut RngHandle) -> Result<f64, PercError> {
    let mut grid = PercolationGrid::new(side)?;
    let mut permutation = site_permutation(side);
    permutation.shuffle(rng);

    let total = (side * side) as f64;
    for (opened, site) in permutation.iter().enumerate() {
        grid.open(site.row as usize, site.col as usize)?;
        if grid.percolates() {
            return Ok((opened + 1) as f64 / total);
        }
    }
    // Unreachable: the final open connects both sentinels.
    Ok(1.0)
}

/// Lists every site of an n-by-n grid in row-major order.
pub fn site_permutation(side: usize) -> Vec<Site> {
    let mut sites = Vec::with_capacity(side * side);
    for row in 1..=side {
        for col in 1..=side {
            sites.push(Site::new(row as u32, col as u32));
        }
    }
    sites
}
