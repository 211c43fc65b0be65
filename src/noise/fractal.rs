//! Multi-octave fractal accumulation of lattice noise.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::NoiseError;
use super::sampler::Noise;
use crate::hash::SmallXxHash;

/// Configuration for multi-octave fractal noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Seed for the root hash.
    pub seed: i32,
    /// Number of octaves (at least 1).
    pub octaves: u32,
    /// Lattice frequency of the first octave (at least 1).
    pub frequency: i32,
    /// Frequency multiplier per octave (at least 1, typically 2).
    pub lacunarity: i32,
    /// Amplitude multiplier per octave (typically below 1).
    pub persistence: f32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 1,
            frequency: 4,
            lacunarity: 2,
            persistence: 0.5,
        }
    }
}

impl FractalConfig {
    /// Default configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Six octaves of fine detail on a coarse base lattice.
    pub fn detailed(seed: i32) -> Self {
        Self {
            seed,
            octaves: 6,
            frequency: 2,
            lacunarity: 2,
            persistence: 0.5,
        }
    }

    /// Few, strongly persistent octaves on a wide lattice.
    pub fn rough(seed: i32) -> Self {
        Self {
            seed,
            octaves: 3,
            frequency: 8,
            lacunarity: 3,
            persistence: 0.7,
        }
    }

    /// Hash every octave is derived from.
    pub fn root_hash(&self) -> SmallXxHash {
        SmallXxHash::seed(self.seed)
    }

    /// Checks the configuration before it enters the accumulation loop.
    ///
    /// Rejects zero octaves, non-positive frequency or lacunarity, octave
    /// frequencies that do not fit in an `i32`, and persistences whose
    /// amplitude sum is zero, subnormal or not finite.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves < 1 {
            return Err(NoiseError::InvalidOctaves(self.octaves));
        }
        if self.frequency < 1 {
            return Err(NoiseError::InvalidFrequency(self.frequency));
        }
        if self.lacunarity < 1 {
            return Err(NoiseError::InvalidLacunarity(self.lacunarity));
        }

        let mut frequency = self.frequency;
        for _ in 1..self.octaves {
            frequency = frequency
                .checked_mul(self.lacunarity)
                .ok_or(NoiseError::FrequencyOverflow {
                    frequency: self.frequency,
                    lacunarity: self.lacunarity,
                    octaves: self.octaves,
                })?;
        }

        if !self.persistence.is_finite() || !self.amplitude_sum().is_normal() {
            return Err(NoiseError::InvalidPersistence(self.persistence));
        }
        Ok(())
    }

    /// Normalizer of the octave sum, accumulated the same way as the loop.
    fn amplitude_sum(&self) -> f32 {
        let mut amplitude = 1.0f32;
        let mut sum = 0.0f32;
        for _ in 0..self.octaves {
            amplitude *= self.persistence;
            sum += amplitude;
        }
        sum
    }

    /// Lattice frequency used by the last octave.
    pub fn max_frequency(&self) -> Result<i32, NoiseError> {
        self.validate()?;
        Ok((1..self.octaves).fold(self.frequency, |f, _| f * self.lacunarity))
    }
}

/// Sums `config.octaves` octaves of `N` at `position`.
///
/// Expects a configuration that passed [`FractalConfig::validate`].
///
/// # Example
/// ```
/// use glam::Vec3;
/// use latticenoise::noise::{fractal_noise, FractalConfig, Lattice3D, LatticeNormal, Perlin};
///
/// let config = FractalConfig::detailed(7);
/// config.validate().unwrap();
/// let value = fractal_noise::<Lattice3D<LatticeNormal, Perlin>>(
///     &config,
///     Vec3::new(0.1, 0.2, 0.3),
///     config.root_hash(),
/// );
/// assert!(value.is_finite());
/// ```
#[inline]
pub fn fractal_noise<N: Noise>(config: &FractalConfig, position: Vec3, hash: SmallXxHash) -> f32 {
    accumulate_octaves(N::get_noise, config, position, hash)
}

/// Octave loop shared by the generic and the dispatched entry points.
///
/// The normalizer sums each amplitude after its decay, so the first octave's
/// unit amplitude is not part of it.
#[inline]
pub(crate) fn accumulate_octaves<F>(
    sample: F,
    config: &FractalConfig,
    position: Vec3,
    hash: SmallXxHash,
) -> f32
where
    F: Fn(SmallXxHash, Vec3, i32) -> f32,
{
    debug_assert!(config.validate().is_ok(), "invalid fractal config {:?}", config);

    let mut sum = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut amplitude_sum = 0.0f32;
    let mut frequency = config.frequency;

    for octave in 0..config.octaves {
        sum += amplitude * sample(hash + octave as i32, position, frequency);
        // Only the product past the last octave can wrap, and it is never sampled
        frequency = frequency.wrapping_mul(config.lacunarity);
        amplitude *= config.persistence;
        amplitude_sum += amplitude;
    }

    sum / amplitude_sum
}
