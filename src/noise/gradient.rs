//! Gradient kinds evaluated at each lattice corner.

use std::marker::PhantomData;

use crate::hash::SmallXxHash;

const PERLIN_2D_SCALE: f32 = 2.0 / 0.53528;
const PERLIN_3D_SCALE: f32 = 1.0 / 0.56290;

/// Contribution of one lattice corner, plus a post-pass on the interpolated
/// result.
///
/// The `x`, `y`, `z` arguments are the offsets from the corner to the sample.
pub trait Gradient {
    fn evaluate_1d(hash: SmallXxHash, x: f32) -> f32;

    fn evaluate_2d(hash: SmallXxHash, x: f32, y: f32) -> f32;

    fn evaluate_3d(hash: SmallXxHash, x: f32, y: f32, z: f32) -> f32;

    /// Applied once, after all axes have been interpolated.
    #[inline]
    fn after_interpolation(value: f32) -> f32 {
        value
    }
}

/// Value noise: each corner carries a constant in [-1, 1].
#[derive(Debug, Clone, Copy, Default)]
pub struct Value;

/// Gradient noise with hashed corner gradients.
#[derive(Debug, Clone, Copy, Default)]
pub struct Perlin;

/// Rectifies the interpolated output of `G`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turbulence<G>(PhantomData<G>);

impl Value {
    #[inline]
    fn corner(hash: SmallXxHash) -> f32 {
        hash.floats01_a() * 2.0 - 1.0
    }
}

impl Gradient for Value {
    #[inline]
    fn evaluate_1d(hash: SmallXxHash, _x: f32) -> f32 {
        Self::corner(hash)
    }

    #[inline]
    fn evaluate_2d(hash: SmallXxHash, _x: f32, _y: f32) -> f32 {
        Self::corner(hash)
    }

    #[inline]
    fn evaluate_3d(hash: SmallXxHash, _x: f32, _y: f32, _z: f32) -> f32 {
        Self::corner(hash)
    }
}

impl Gradient for Perlin {
    #[inline]
    fn evaluate_1d(hash: SmallXxHash, x: f32) -> f32 {
        let signed = if hash.finalize() & (1 << 8) == 0 { x } else { -x };
        (1.0 + hash.floats01_a()) * signed
    }

    #[inline]
    fn evaluate_2d(hash: SmallXxHash, x: f32, y: f32) -> f32 {
        let mut gx = hash.floats01_a() * 2.0 - 1.0;
        let gy = 0.5 - gx.abs();
        gx -= (gx + 0.5).floor();
        (gx * x + gy * y) * PERLIN_2D_SCALE
    }

    #[inline]
    fn evaluate_3d(hash: SmallXxHash, x: f32, y: f32, z: f32) -> f32 {
        let mut gx = hash.floats01_a() * 2.0 - 1.0;
        let mut gy = hash.floats01_d() * 2.0 - 1.0;
        let gz = 1.0 - gx.abs() - gy.abs();

        // Fold the lower half of the octahedron outwards
        let offset = (-gz).max(0.0);
        gx += if gx < 0.0 { -offset } else { offset };
        gy += if gy < 0.0 { -offset } else { offset };

        (gx * x + gy * y + gz * z) * PERLIN_3D_SCALE
    }
}

impl<G: Gradient> Gradient for Turbulence<G> {
    #[inline]
    fn evaluate_1d(hash: SmallXxHash, x: f32) -> f32 {
        G::evaluate_1d(hash, x)
    }

    #[inline]
    fn evaluate_2d(hash: SmallXxHash, x: f32, y: f32) -> f32 {
        G::evaluate_2d(hash, x, y)
    }

    #[inline]
    fn evaluate_3d(hash: SmallXxHash, x: f32, y: f32, z: f32) -> f32 {
        G::evaluate_3d(hash, x, y, z)
    }

    #[inline]
    fn after_interpolation(value: f32) -> f32 {
        G::after_interpolation(value).abs()
    }
}
