#![deny(missing_docs)]

//! Shared error, RNG, and coordinate types for the percolation engine.

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, PercError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::Site;
