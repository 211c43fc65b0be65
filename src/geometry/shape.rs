//! Parametric surfaces sampled on a `resolution × resolution` grid.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A point on a surface together with its (unnormalized) normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Surfaces the sample grid can be wrapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Shape {
    /// Unit square in the XZ plane, centred on the origin.
    #[default]
    Plane,
    /// UV sphere of radius 0.5.
    Sphere,
    /// Octahedron projected onto a sphere of radius 0.5.
    OctahedronSphere,
    /// Torus with major radius 0.375 and minor radius 0.125.
    Torus,
    /// Octahedron with vertices at distance 0.5.
    Octahedron,
}

const SPHERE_RADIUS: f32 = 0.5;
const TORUS_MAJOR_RADIUS: f32 = 0.375;
const TORUS_MINOR_RADIUS: f32 = 0.125;

/// Maps a row-major grid index to UV coordinates in [0, 1).
pub fn index_to_uv(index: u32, resolution: f32, inv_resolution: f32) -> Vec2 {
    let i = index as f32;
    let v = (inv_resolution * i).floor();
    let u = inv_resolution * (i - resolution * v);
    Vec2::new(u, v * inv_resolution)
}

impl Shape {
    pub const fn all() -> [Shape; 5] {
        [
            Shape::Plane,
            Shape::Sphere,
            Shape::OctahedronSphere,
            Shape::Torus,
            Shape::Octahedron,
        ]
    }

    /// Surface point for grid cell `index`.
    pub fn point(self, index: u32, resolution: f32, inv_resolution: f32) -> SurfacePoint {
        let uv = index_to_uv(index, resolution, inv_resolution);
        match self {
            Shape::Plane => SurfacePoint {
                position: Vec3::new(uv.x - 0.5, 0.0, uv.y - 0.5),
                normal: Vec3::Y,
            },
            Shape::Sphere => {
                let s = SPHERE_RADIUS * (PI * uv.y).sin();
                let position = Vec3::new(
                    s * (TAU * uv.x).sin(),
                    SPHERE_RADIUS * (PI * uv.y).cos(),
                    s * (TAU * uv.x).cos(),
                );
                SurfacePoint { position, normal: position }
            }
            Shape::OctahedronSphere => {
                let folded = octahedron(uv);
                let position = folded * (SPHERE_RADIUS / folded.length());
                SurfacePoint { position, normal: position }
            }
            Shape::Torus => {
                let s = TORUS_MAJOR_RADIUS + TORUS_MINOR_RADIUS * (TAU * uv.y).cos();
                let (sin_u, cos_u) = (TAU * uv.x).sin_cos();
                let position = Vec3::new(
                    s * sin_u,
                    TORUS_MINOR_RADIUS * (TAU * uv.y).sin(),
                    s * cos_u,
                );
                let ring = Vec3::new(TORUS_MAJOR_RADIUS * sin_u, 0.0, TORUS_MAJOR_RADIUS * cos_u);
                SurfacePoint { position, normal: position - ring }
            }
            Shape::Octahedron => {
                let position = octahedron(uv);
                SurfacePoint { position, normal: position }
            }
        }
    }
}

/// Folds the unit square onto an octahedron with `|x| + |y| + |z| == 0.5`.
fn octahedron(uv: Vec2) -> Vec3 {
    let mut x = uv.x - 0.5;
    let mut y = uv.y - 0.5;
    let z = 0.5 - x.abs() - y.abs();

    let offset = (-z).max(0.0);
    x += if x < 0.0 { offset } else { -offset };
    y += if y < 0.0 { offset } else { -offset };

    Vec3::new(x, y, z)
}
