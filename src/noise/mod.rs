//! Lattice noise evaluation.
//!
//! Topologies ([`LatticeNormal`], [`LatticeTiling`]) and gradient kinds
//! ([`Value`], [`Perlin`], [`Turbulence`]) are zero-sized types composed by the
//! [`Lattice1D`], [`Lattice2D`] and [`Lattice3D`] samplers. The [`dispatch`]
//! layer maps runtime enums onto those compile-time combinations.

mod error;
mod fractal;
mod gradient;
mod lattice;
mod sampler;
pub mod dispatch;

pub use dispatch::{
    evaluate_fractal, evaluate_fractal_batch, evaluate_noise, noise_fn, seed_hash, Dimension,
    NoiseFn, NoiseKind, TopologyKind,
};
pub use error::NoiseError;
pub use fractal::{fractal_noise, FractalConfig};
pub(crate) use fractal::accumulate_octaves;
pub use gradient::{Gradient, Perlin, Turbulence, Value};
pub use lattice::{lerp, smooth, Lattice, LatticeNormal, LatticeSpan, LatticeTiling};
pub use sampler::{Empty, Lattice1D, Lattice2D, Lattice3D, Noise};
