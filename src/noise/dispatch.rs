//! Enum-keyed selection of monomorphized noise functions.
//!
//! The kind/topology/dimension triple is resolved once into a plain `fn`
//! pointer; the per-sample path never branches on it.

use glam::Vec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{check_frequency, NoiseError};
use super::fractal::{accumulate_octaves, FractalConfig};
use super::gradient::{Gradient, Perlin, Turbulence, Value};
use super::lattice::{Lattice, LatticeNormal, LatticeTiling};
use super::sampler::{Empty, Lattice1D, Lattice2D, Lattice3D, Noise};
use crate::hash::SmallXxHash;

/// A resolved single-octave noise function.
pub type NoiseFn = fn(SmallXxHash, Vec3, i32) -> f32;

/// Which gradient kind to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum NoiseKind {
    #[default]
    Empty,
    Value,
    Perlin,
    ValueTurbulence,
    PerlinTurbulence,
}

/// Which lattice topology to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum TopologyKind {
    #[default]
    Normal,
    Tiling,
}

/// How many axes of the position are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimension {
    /// X only.
    #[default]
    #[value(name = "1")]
    One,
    /// X and Z.
    #[value(name = "2")]
    Two,
    /// X, Y and Z.
    #[value(name = "3")]
    Three,
}

impl NoiseKind {
    /// All kinds in declaration order.
    pub const fn all() -> [NoiseKind; 5] {
        [
            NoiseKind::Empty,
            NoiseKind::Value,
            NoiseKind::Perlin,
            NoiseKind::ValueTurbulence,
            NoiseKind::PerlinTurbulence,
        ]
    }

    /// True for the rectified kinds, whose output is never negative.
    pub const fn is_turbulence(self) -> bool {
        matches!(self, NoiseKind::ValueTurbulence | NoiseKind::PerlinTurbulence)
    }
}

impl Dimension {
    pub const fn all() -> [Dimension; 3] {
        [Dimension::One, Dimension::Two, Dimension::Three]
    }

    /// Number of axes (1-3).
    pub const fn axes(self) -> u8 {
        match self {
            Dimension::One => 1,
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimension {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimension::One),
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(NoiseError::InvalidDimension(other)),
        }
    }
}

impl From<Dimension> for u8 {
    fn from(dimension: Dimension) -> Self {
        dimension.axes()
    }
}

/// Resolves the noise function for a kind, topology and dimension.
pub fn noise_fn(kind: NoiseKind, topology: TopologyKind, dimension: Dimension) -> NoiseFn {
    match topology {
        TopologyKind::Normal => with_lattice::<LatticeNormal>(kind, dimension),
        TopologyKind::Tiling => with_lattice::<LatticeTiling>(kind, dimension),
    }
}

fn with_lattice<L: Lattice>(kind: NoiseKind, dimension: Dimension) -> NoiseFn {
    match kind {
        NoiseKind::Empty => Empty::get_noise,
        NoiseKind::Value => with_gradient::<L, Value>(dimension),
        NoiseKind::Perlin => with_gradient::<L, Perlin>(dimension),
        NoiseKind::ValueTurbulence => with_gradient::<L, Turbulence<Value>>(dimension),
        NoiseKind::PerlinTurbulence => with_gradient::<L, Turbulence<Perlin>>(dimension),
    }
}

fn with_gradient<L: Lattice, G: Gradient>(dimension: Dimension) -> NoiseFn {
    match dimension {
        Dimension::One => Lattice1D::<L, G>::get_noise,
        Dimension::Two => Lattice2D::<L, G>::get_noise,
        Dimension::Three => Lattice3D::<L, G>::get_noise,
    }
}

/// Root hash for a seed.
pub fn seed_hash(seed: i32) -> SmallXxHash {
    SmallXxHash::seed(seed)
}

/// Evaluates one octave of noise.
///
/// A frequency below 1 is rejected for every kind that touches the lattice;
/// [`NoiseKind::Empty`] returns zero regardless.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use latticenoise::noise::{evaluate_noise, seed_hash, Dimension, NoiseKind, TopologyKind};
///
/// let value = evaluate_noise(
///     NoiseKind::Value,
///     TopologyKind::Normal,
///     Dimension::Three,
///     seed_hash(0),
///     Vec3::new(0.2, 0.4, 0.6),
///     4,
/// )
/// .unwrap();
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub fn evaluate_noise(
    kind: NoiseKind,
    topology: TopologyKind,
    dimension: Dimension,
    hash: SmallXxHash,
    position: Vec3,
    frequency: i32,
) -> Result<f32, NoiseError> {
    if kind == NoiseKind::Empty {
        return Ok(0.0);
    }
    check_frequency(frequency)?;
    Ok(noise_fn(kind, topology, dimension)(hash, position, frequency))
}

/// Evaluates fractal noise at one position.
pub fn evaluate_fractal(
    config: &FractalConfig,
    kind: NoiseKind,
    topology: TopologyKind,
    dimension: Dimension,
    root_hash: SmallXxHash,
    position: Vec3,
) -> Result<f32, NoiseError> {
    config.validate()?;
    let sample = noise_fn(kind, topology, dimension);
    Ok(accumulate_octaves(sample, config, position, root_hash))
}

/// Evaluates fractal noise for many positions in parallel.
///
/// The root hash is taken from `config.seed`.
pub fn evaluate_fractal_batch(
    config: &FractalConfig,
    kind: NoiseKind,
    topology: TopologyKind,
    dimension: Dimension,
    positions: &[Vec3],
) -> Result<Vec<f32>, NoiseError> {
    config.validate()?;
    if positions.is_empty() {
        return Ok(Vec::new());
    }

    let sample = noise_fn(kind, topology, dimension);
    let root_hash = config.root_hash();
    tracing::debug!(
        points = positions.len(),
        ?kind,
        ?topology,
        ?dimension,
        octaves = config.octaves,
        "evaluating fractal batch"
    );

    Ok(positions
        .par_iter()
        .map(|&position| accumulate_octaves(sample, config, position, root_hash))
        .collect())
}
