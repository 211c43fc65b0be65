//! Parallel evaluation of noise over a displaced surface grid.

use std::time::Instant;

use glam::{Mat4, Vec3};
use rayon::prelude::*;
use thiserror::Error;

use super::config::{SampleMode, VisualizationConfig, MAX_RESOLUTION};
use crate::noise::{accumulate_octaves, noise_fn, NoiseError};

/// Errors that can occur while sampling a grid.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Noise configuration error: {0}")]
    Noise(#[from] NoiseError),
    #[error("Resolution must be between 1 and {}, got {0}", MAX_RESOLUTION)]
    InvalidResolution(u32),
    #[error("Object transform is not invertible")]
    SingularTransform,
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Transformed position, displaced along the normal.
    pub position: Vec3,
    /// Unit normal in object space.
    pub normal: Vec3,
    pub noise: f32,
    /// Linear RGB in [0, 1] for values within [-1, 1].
    pub color: [f32; 3],
}

/// Row-major grid of evaluated points.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    pub resolution: u32,
    pub points: Vec<SamplePoint>,
}

impl SampleGrid {
    /// Noise values in row-major order.
    pub fn values(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.noise).collect()
    }

    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.points.iter().map(|p| p.color).collect()
    }

    /// Minimum and maximum noise value.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for point in &self.points {
            min = min.min(point.noise);
            max = max.max(point.noise);
        }
        (min, max)
    }
}

/// Maps noise to a colour: negative values shade red, the rest grey.
pub fn noise_color(noise: f32) -> [f32; 3] {
    if noise < 0.0 {
        [-noise, 0.0, 0.0]
    } else {
        [noise, noise, noise]
    }
}

/// Samples every grid point of `config.shape` and displaces it by the noise.
///
/// `transform` places the surface in the world; noise is evaluated in the
/// space given by `config.domain`.
pub fn generate_samples(config: &VisualizationConfig, transform: Mat4) -> Result<SampleGrid, SampleError> {
    config.validate()?;
    if transform.determinant() == 0.0 {
        return Err(SampleError::SingularTransform);
    }

    let start = Instant::now();
    let resolution = config.resolution as f32;
    let inv_resolution = 1.0 / resolution;
    let domain = config.domain.matrix();
    let normal_matrix = transform.inverse().transpose();
    let sample = noise_fn(config.noise, config.topology, config.dimension);
    let hash = config.fractal.root_hash();
    let fractal = &config.fractal;

    let points: Vec<SamplePoint> = (0..config.resolution * config.resolution)
        .into_par_iter()
        .map(|index| {
            let surface = config.shape.point(index, resolution, inv_resolution);
            let normal = normal_matrix.transform_vector3(surface.normal).normalize_or_zero();

            let domain_position = domain.transform_point3(surface.position);
            let noise = match config.mode {
                SampleMode::Single => sample(hash, domain_position, fractal.frequency),
                SampleMode::Fractal => accumulate_octaves(sample, fractal, domain_position, hash),
            };

            SamplePoint {
                position: transform.transform_point3(surface.position) + normal * (noise * config.displacement),
                normal,
                noise,
                color: noise_color(noise),
            }
        })
        .collect();

    tracing::debug!(
        points = points.len(),
        shape = ?config.shape,
        noise = ?config.noise,
        elapsed = ?start.elapsed(),
        "sampled grid"
    );

    Ok(SampleGrid {
        resolution: config.resolution,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::noise::{evaluate_fractal, evaluate_noise, Dimension, NoiseKind, TopologyKind};

    fn small_config() -> VisualizationConfig {
        VisualizationConfig {
            resolution: 16,
            ..Default::default()
        }
    }

    #[test]
    fn test_noise_color() {
        assert_eq!(noise_color(-0.5), [0.5, 0.0, 0.0]);
        assert_eq!(noise_color(0.25), [0.25, 0.25, 0.25]);
        assert_eq!(noise_color(0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_grid_size() {
        let grid = generate_samples(&small_config(), Mat4::IDENTITY).unwrap();
        assert_eq!(grid.resolution, 16);
        assert_eq!(grid.points.len(), 256);
        assert_eq!(grid.values().len(), 256);
        assert_eq!(grid.colors().len(), 256);
    }

    #[test]
    fn test_grid_matches_fractal_api() {
        let config = VisualizationConfig {
            shape: Shape::Sphere,
            ..small_config()
        };
        let grid = generate_samples(&config, Mat4::IDENTITY).unwrap();
        let domain = config.domain.matrix();
        let resolution = config.resolution as f32;

        for (i, point) in grid.points.iter().enumerate() {
            let surface = config.shape.point(i as u32, resolution, 1.0 / resolution);
            let expected = evaluate_fractal(
                &config.fractal,
                config.noise,
                config.topology,
                config.dimension,
                config.fractal.root_hash(),
                domain.transform_point3(surface.position),
            )
            .unwrap();
            assert_eq!(point.noise.to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn test_single_mode_uses_configured_frequency() {
        let config = VisualizationConfig {
            mode: SampleMode::Single,
            noise: NoiseKind::Value,
            dimension: Dimension::Two,
            ..small_config()
        };
        let grid = generate_samples(&config, Mat4::IDENTITY).unwrap();
        let domain = config.domain.matrix();
        let resolution = config.resolution as f32;

        for (i, point) in grid.points.iter().enumerate().step_by(7) {
            let surface = config.shape.point(i as u32, resolution, 1.0 / resolution);
            let expected = evaluate_noise(
                NoiseKind::Value,
                TopologyKind::Normal,
                Dimension::Two,
                config.fractal.root_hash(),
                domain.transform_point3(surface.position),
                config.fractal.frequency,
            )
            .unwrap();
            assert_eq!(point.noise, expected);
        }
    }

    #[test]
    fn test_plane_displacement_along_normal() {
        let config = VisualizationConfig {
            displacement: 0.25,
            ..small_config()
        };
        let grid = generate_samples(&config, Mat4::IDENTITY).unwrap();
        for point in &grid.points {
            assert_eq!(point.normal, Vec3::Y);
            assert!((point.position.y - point.noise * 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_transform_applied_to_positions_and_normals() {
        let config = VisualizationConfig {
            displacement: 0.0,
            ..small_config()
        };
        let transform = Mat4::from_translation(Vec3::new(0.0, 3.0, 0.0)) * Mat4::from_scale(Vec3::new(2.0, 1.0, 2.0));
        let plain = generate_samples(&config, Mat4::IDENTITY).unwrap();
        let moved = generate_samples(&config, transform).unwrap();

        for (a, b) in plain.points.iter().zip(moved.points.iter()) {
            assert_eq!(a.noise, b.noise);
            assert!((b.position - transform.transform_point3(a.position)).length() < 1e-6);
            assert!((b.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_noise_leaves_surface_untouched() {
        let config = VisualizationConfig {
            shape: Shape::Torus,
            noise: NoiseKind::Empty,
            displacement: 1.0,
            ..small_config()
        };
        let grid = generate_samples(&config, Mat4::IDENTITY).unwrap();
        let resolution = config.resolution as f32;
        for (i, point) in grid.points.iter().enumerate() {
            let surface = Shape::Torus.point(i as u32, resolution, 1.0 / resolution);
            assert_eq!(point.noise, 0.0);
            assert_eq!(point.position, surface.position);
        }
        assert_eq!(grid.value_range(), (0.0, 0.0));
    }

    #[test]
    fn test_turbulence_colors_are_grey() {
        let config = VisualizationConfig {
            noise: NoiseKind::PerlinTurbulence,
            ..small_config()
        };
        let grid = generate_samples(&config, Mat4::IDENTITY).unwrap();
        for point in &grid.points {
            assert!(point.noise >= 0.0);
            assert_eq!(point.color[0], point.color[1]);
        }
    }

    #[test]
    fn test_invalid_resolution_message() {
        let message = SampleError::InvalidResolution(0).to_string();
        assert_eq!(message, format!("Resolution must be between 1 and {}, got 0", MAX_RESOLUTION));
    }

    #[test]
    fn test_singular_transform_rejected() {
        let result = generate_samples(&small_config(), Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0)));
        assert!(matches!(result, Err(SampleError::SingularTransform)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = small_config();
        config.fractal.octaves = 0;
        let result = generate_samples(&config, Mat4::IDENTITY);
        assert!(matches!(result, Err(SampleError::Noise(NoiseError::InvalidOctaves(0)))));
    }

    #[test]
    fn test_sampling_reproducible() {
        let config = VisualizationConfig {
            shape: Shape::OctahedronSphere,
            fractal: crate::noise::FractalConfig::detailed(77),
            ..small_config()
        };
        let a = generate_samples(&config, Mat4::IDENTITY).unwrap();
        let b = generate_samples(&config, Mat4::IDENTITY).unwrap();
        assert_eq!(a.values(), b.values());
    }
}
