#![deny(missing_docs)]

//! Dynamic connectivity and the percolation site grid built on top of it.

mod connectivity;
mod grid;

pub use connectivity::DisjointSets;
pub use grid::PercolationGrid;
