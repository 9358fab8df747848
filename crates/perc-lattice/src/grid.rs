//! Square site grid wired to a disjoint-set structure through two virtual
//! sentinel labels.

use perc_core::errors::ErrorInfo;
use perc_core::PercError;

use crate::connectivity::DisjointSets;

/// Label of the virtual top sentinel, connected to every open top-row site.
const TOP: usize = 0;

/// An n-by-n grid of sites, each either open or blocked.
///
/// Sites are addressed with one-based `(row, col)` pairs; row 1 is the top.
/// The disjoint-set universe holds one label per site plus two sentinels:
/// label 0 sits above the top row and label `n*n + 1` below the bottom row.
/// Opening a top-row site unions it with the top sentinel, a bottom-row
/// site with the bottom sentinel, so the grid percolates exactly when the
/// two sentinels share a component.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    side: usize,
    openness: Vec<bool>,
    connectivity: DisjointSets,
}

impl PercolationGrid {
    /// Creates a grid with all sites blocked.
    pub fn new(side: usize) -> Result<Self, PercError> {
        if side == 0 {
            return Err(PercError::Argument(
                ErrorInfo::new("grid-side", "grid side must be positive")
                    .with_context("side", side.to_string())
                    .with_hint("construct with n >= 1"),
            ));
        }
        Ok(Self {
            side,
            openness: vec![false; side * side],
            connectivity: DisjointSets::new(side * side + 2),
        })
    }

    /// Returns the grid dimension n.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Label of the virtual bottom sentinel.
    fn bottom(&self) -> usize {
        self.side * self.side + 1
    }

    /// Disjoint-set label of a validated one-based site.
    fn label(&self, row: usize, col: usize) -> usize {
        1 + self.side * (row - 1) + (col - 1)
    }

    /// Index of a validated one-based site into `openness`.
    fn cell(&self, row: usize, col: usize) -> usize {
        self.side * (row - 1) + (col - 1)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), PercError> {
        if row < 1 || row > self.side || col < 1 || col > self.side {
            return Err(PercError::Argument(
                ErrorInfo::new("site-bounds", "row and col must lie within the grid")
                    .with_context("row", row.to_string())
                    .with_context("col", col.to_string())
                    .with_context("side", self.side.to_string()),
            ));
        }
        Ok(())
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// A freshly opened site is unioned with each already-open orthogonal
    /// neighbour, with the top sentinel when it lies in row 1, and with the
    /// bottom sentinel when it lies in row n. Unions never fail here: all
    /// labels are inside the universe by construction.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercError> {
        self.check_bounds(row, col)?;
        let cell = self.cell(row, col);
        if self.openness[cell] {
            return Ok(());
        }
        self.openness[cell] = true;

        let label = self.label(row, col);
        if col > 1 && self.openness[cell - 1] {
            self.connectivity.union(label, label - 1)?;
        }
        if col < self.side && self.openness[cell + 1] {
            self.connectivity.union(label, label + 1)?;
        }
        if row > 1 {
            if self.openness[cell - self.side] {
                self.connectivity.union(label, label - self.side)?;
            }
        } else {
            self.connectivity.union(label, TOP)?;
        }
        if row < self.side {
            if self.openness[cell + self.side] {
                self.connectivity.union(label, label + self.side)?;
            }
        } else {
            self.connectivity.union(label, self.bottom())?;
        }
        Ok(())
    }

    /// Returns whether the site at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercError> {
        self.check_bounds(row, col)?;
        Ok(self.openness[self.cell(row, col)])
    }

    /// Returns whether the site at `(row, col)` is full, i.e. connected to
    /// the top row through a chain of open sites.
    ///
    /// A blocked site is never full: it has never participated in a union.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercError> {
        self.check_bounds(row, col)?;
        self.connectivity.connected(TOP, self.label(row, col))
    }

    /// Returns the number of open sites.
    pub fn open_sites(&self) -> usize {
        self.openness.iter().filter(|&&open| open).count()
    }

    /// Returns whether an open path connects the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        // Both sentinel labels are always in range.
        self.connectivity
            .connected(TOP, self.bottom())
            .unwrap_or(false)
    }

    /// Blocks every site and severs all connections, keeping the dimension.
    pub fn reset(&mut self) {
        self.openness.fill(false);
        self.connectivity.reset();
    }
}
