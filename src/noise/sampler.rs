//! Lattice samplers composing a topology with a gradient kind.

use std::marker::PhantomData;

use glam::Vec3;

use super::gradient::Gradient;
use super::lattice::{lerp, Lattice};
use crate::hash::SmallXxHash;

/// A single-octave noise function.
///
/// Implementors are zero-sized; `get_noise` is an associated function so each
/// topology/gradient pairing monomorphizes into its own plain `fn`.
pub trait Noise {
    /// Samples the noise at `position` with the lattice scaled by `frequency`.
    fn get_noise(hash: SmallXxHash, position: Vec3, frequency: i32) -> f32;
}

/// Always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Noise along the X axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lattice1D<L, G>(PhantomData<(L, G)>);

/// Noise over the XZ plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lattice2D<L, G>(PhantomData<(L, G)>);

/// Noise over XYZ.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lattice3D<L, G>(PhantomData<(L, G)>);

impl Noise for Empty {
    #[inline]
    fn get_noise(_hash: SmallXxHash, _position: Vec3, _frequency: i32) -> f32 {
        0.0
    }
}

impl<L: Lattice, G: Gradient> Noise for Lattice1D<L, G> {
    #[inline]
    fn get_noise(hash: SmallXxHash, position: Vec3, frequency: i32) -> f32 {
        let x = L::span(position.x, frequency);

        let h0 = hash.eat(x.p0);
        let h1 = hash.eat(x.p1);

        G::after_interpolation(lerp(
            G::evaluate_1d(h0, x.g0),
            G::evaluate_1d(h1, x.g1),
            x.t,
        ))
    }
}

impl<L: Lattice, G: Gradient> Noise for Lattice2D<L, G> {
    #[inline]
    fn get_noise(hash: SmallXxHash, position: Vec3, frequency: i32) -> f32 {
        let x = L::span(position.x, frequency);
        let z = L::span(position.z, frequency);

        let h0 = hash.eat(x.p0);
        let h1 = hash.eat(x.p1);

        G::after_interpolation(lerp(
            lerp(
                G::evaluate_2d(h0.eat(z.p0), x.g0, z.g0),
                G::evaluate_2d(h0.eat(z.p1), x.g0, z.g1),
                z.t,
            ),
            lerp(
                G::evaluate_2d(h1.eat(z.p0), x.g1, z.g0),
                G::evaluate_2d(h1.eat(z.p1), x.g1, z.g1),
                z.t,
            ),
            x.t,
        ))
    }
}

impl<L: Lattice, G: Gradient> Noise for Lattice3D<L, G> {
    #[inline]
    fn get_noise(hash: SmallXxHash, position: Vec3, frequency: i32) -> f32 {
        let x = L::span(position.x, frequency);
        let y = L::span(position.y, frequency);
        let z = L::span(position.z, frequency);

        let h0 = hash.eat(x.p0);
        let h1 = hash.eat(x.p1);
        let h00 = h0.eat(y.p0);
        let h01 = h0.eat(y.p1);
        let h10 = h1.eat(y.p0);
        let h11 = h1.eat(y.p1);

        G::after_interpolation(lerp(
            lerp(
                lerp(
                    G::evaluate_3d(h00.eat(z.p0), x.g0, y.g0, z.g0),
                    G::evaluate_3d(h00.eat(z.p1), x.g0, y.g0, z.g1),
                    z.t,
                ),
                lerp(
                    G::evaluate_3d(h01.eat(z.p0), x.g0, y.g1, z.g0),
                    G::evaluate_3d(h01.eat(z.p1), x.g0, y.g1, z.g1),
                    z.t,
                ),
                y.t,
            ),
            lerp(
                lerp(
                    G::evaluate_3d(h10.eat(z.p0), x.g1, y.g0, z.g0),
                    G::evaluate_3d(h10.eat(z.p1), x.g1, y.g0, z.g1),
                    z.t,
                ),
                lerp(
                    G::evaluate_3d(h11.eat(z.p0), x.g1, y.g1, z.g0),
                    G::evaluate_3d(h11.eat(z.p1), x.g1, y.g1, z.g1),
                    z.t,
                ),
                y.t,
            ),
            x.t,
        ))
    }
}
