//! Visualization configuration and its JSON file form.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::SampleError;
use crate::geometry::{DomainMotion, Shape, SpaceTrs};
use crate::noise::{Dimension, FractalConfig, NoiseKind, TopologyKind};

/// Largest grid side length accepted.
pub const MAX_RESOLUTION: u32 = 512;

/// Errors reading or writing a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether each point evaluates one octave or the full fractal sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SampleMode {
    /// One lattice sample at `fractal.frequency`.
    Single,
    /// `fractal.octaves` octaves.
    #[default]
    Fractal,
}

/// Everything needed to sample a noise-displaced surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Surface the grid is wrapped onto.
    pub shape: Shape,
    /// Points per side (1-512).
    pub resolution: u32,
    /// Distance each point moves along its normal per unit of noise.
    pub displacement: f32,
    /// Transform from surface space into noise space.
    pub domain: SpaceTrs,
    /// Per-second drift of `domain` when animating.
    pub motion: DomainMotion,
    pub noise: NoiseKind,
    pub topology: TopologyKind,
    pub dimension: Dimension,
    pub mode: SampleMode,
    pub fractal: FractalConfig,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Plane,
            resolution: 64,
            displacement: 0.1,
            domain: SpaceTrs::with_scale(4.0),
            motion: DomainMotion::default(),
            noise: NoiseKind::Perlin,
            topology: TopologyKind::Normal,
            dimension: Dimension::Three,
            mode: SampleMode::Fractal,
            fractal: FractalConfig::default(),
        }
    }
}

impl VisualizationConfig {
    /// Number of sample points.
    pub fn point_count(&self) -> usize {
        (self.resolution as usize) * (self.resolution as usize)
    }

    /// Checks resolution and noise parameters.
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.resolution < 1 || self.resolution > MAX_RESOLUTION {
            return Err(SampleError::InvalidResolution(self.resolution));
        }
        self.fractal.validate()?;
        Ok(())
    }

    /// Copy of this configuration with the domain moved forward by `dt` seconds.
    pub fn advanced(&self, dt: f32) -> Self {
        let mut next = self.clone();
        self.motion.advance(&mut next.domain, dt);
        next
    }
}

/// Reads a configuration from a JSON file.
///
/// Missing fields take their default values.
pub fn load_config(path: &Path) -> Result<VisualizationConfig, ConfigError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a configuration as pretty-printed JSON.
pub fn save_config(config: &VisualizationConfig, path: &Path) -> Result<(), ConfigError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, config)?;
    Ok(())
}
