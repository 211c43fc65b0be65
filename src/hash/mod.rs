//! Seeded avalanche hashing for lattice coordinates.
//!
//! A small xxHash32-derived accumulator that is fed integer lattice indices
//! and finalized into well-distributed 32-bit values.

mod small_xx_hash;

pub use small_xx_hash::{rotate_left, SmallXxHash};
