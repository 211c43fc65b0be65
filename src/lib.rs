//! Seeded lattice noise.
//!
//! This crate provides a small xxHash-derived hash, value and Perlin lattice
//! noise (plus their turbulence variants) in one, two and three dimensions,
//! fractal accumulation over octaves, and a driver that samples the noise over
//! parametric surfaces and exports the result.

pub mod hash;
pub mod noise;
pub mod geometry;
pub mod sampling;
pub mod export;

pub use hash::SmallXxHash;
pub use noise::{
    evaluate_fractal, evaluate_noise, seed_hash, Dimension, FractalConfig, NoiseError, NoiseKind,
    TopologyKind,
};
pub use geometry::{Shape, SpaceTrs};
pub use sampling::{generate_samples, SampleGrid, VisualizationConfig};
