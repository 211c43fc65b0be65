//! Errors raised when noise parameters violate their preconditions.

use thiserror::Error;

/// Invalid noise or fractal configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NoiseError {
    #[error("Octave count must be at least 1, got {0}")]
    InvalidOctaves(u32),
    #[error("Lattice frequency must be at least 1, got {0}")]
    InvalidFrequency(i32),
    #[error("Lacunarity must be at least 1, got {0}")]
    InvalidLacunarity(i32),
    #[error("Persistence {0} gives a zero or non-finite amplitude sum")]
    InvalidPersistence(f32),
    #[error("Dimension must be 1, 2 or 3, got {0}")]
    InvalidDimension(u8),
    #[error("Frequency {frequency} overflows after {octaves} octaves with lacunarity {lacunarity}")]
    FrequencyOverflow {
        frequency: i32,
        lacunarity: i32,
        octaves: u32,
    },
}

/// Rejects frequencies a lattice topology cannot divide by.
pub(crate) fn check_frequency(frequency: i32) -> Result<(), NoiseError> {
    if frequency < 1 {
        return Err(NoiseError::InvalidFrequency(frequency));
    }
    Ok(())
}
