//! Surface sampling driver: configuration, parallel grid evaluation.

mod config;
mod grid;

pub use config::{load_config, save_config, ConfigError, SampleMode, VisualizationConfig, MAX_RESOLUTION};
pub use grid::{generate_samples, noise_color, SampleError, SampleGrid, SamplePoint};
