//! Lattice topologies: how one coordinate axis splits into two lattice points.

use serde::{Deserialize, Serialize};

/// The two lattice points bracketing a coordinate on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeSpan {
    /// Lower lattice index.
    pub p0: i32,
    /// Upper lattice index.
    pub p1: i32,
    /// Smoothed blend factor in [0, 1].
    pub t: f32,
    /// Offset of the sample from `p0`.
    pub g0: f32,
    /// Offset of the sample from `p1`.
    pub g1: f32,
}

/// Resolves a coordinate into a [`LatticeSpan`].
///
/// Implementors are zero-sized markers; the span is computed by an associated
/// function so the choice of topology is resolved at compile time.
pub trait Lattice {
    /// Computes the span for `coordinate` scaled by `frequency`.
    ///
    /// `frequency` must be at least 1.
    fn span(coordinate: f32, frequency: i32) -> LatticeSpan;
}

/// Unbounded lattice: `p1` is always `p0 + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeNormal;

/// Periodic lattice: indices wrap into `[0, frequency)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeTiling;

impl Lattice for LatticeNormal {
    #[inline]
    fn span(coordinate: f32, frequency: i32) -> LatticeSpan {
        debug_assert!(frequency >= 1, "lattice frequency {}", frequency);
        let coordinate = coordinate * frequency as f32;
        let point = coordinate.floor();
        let p0 = point as i32;
        let g0 = coordinate - p0 as f32;

        LatticeSpan {
            p0,
            // Saturated coordinates put p0 at i32::MAX; the neighbour wraps
            p1: p0.wrapping_add(1),
            t: smooth(coordinate - point),
            g0,
            g1: g0 - 1.0,
        }
    }
}

impl Lattice for LatticeTiling {
    #[inline]
    fn span(coordinate: f32, frequency: i32) -> LatticeSpan {
        debug_assert!(frequency >= 1, "lattice frequency {}", frequency);
        let coordinate = coordinate * frequency as f32;
        let point = coordinate.floor();
        let unwrapped = point as i32;

        // Offsets come from the unwrapped index, only the hash inputs wrap
        let g0 = coordinate - unwrapped as f32;
        let p0 = unwrapped.rem_euclid(frequency);
        let p1 = if p0 + 1 == frequency { 0 } else { p0 + 1 };

        LatticeSpan {
            p0,
            p1,
            t: smooth(coordinate - point),
            g0,
            g1: g0 - 1.0,
        }
    }
}

/// Quintic smoothstep `6x^5 - 15x^4 + 10x^3`.
///
/// First and second derivatives vanish at 0 and 1.
#[inline]
pub fn smooth(x: f32) -> f32 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Unclamped linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_endpoints() {
        assert_eq!(smooth(0.0), 0.0);
        assert_eq!(smooth(1.0), 1.0);
        assert_eq!(smooth(0.5), 0.5);
    }

    #[test]
    fn test_smooth_flat_at_endpoints() {
        let h = 1e-2;
        let d0 = (smooth(h) - smooth(0.0)) / h;
        let d1 = (smooth(1.0) - smooth(1.0 - h)) / h;
        let mid = (smooth(0.5 + h) - smooth(0.5)) / h;
        assert!(d0.abs() < 2e-3, "derivative at 0: {}", d0);
        assert!(d1.abs() < 2e-3, "derivative at 1: {}", d1);
        assert!(mid > 1.5, "derivative at 0.5: {}", mid);
    }

    #[test]
    fn test_smooth_monotonic() {
        let mut previous = smooth(0.0);
        for i in 1..=100 {
            let value = smooth(i as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        // No clamping outside [0, 1]
        assert_eq!(lerp(0.0, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_normal_span() {
        let span = LatticeNormal::span(0.375, 4);
        assert_eq!(span.p0, 1);
        assert_eq!(span.p1, 2);
        assert_eq!(span.g0, 0.5);
        assert_eq!(span.g1, -0.5);
        assert_eq!(span.t, 0.5);
    }

    #[test]
    fn test_normal_span_negative() {
        let span = LatticeNormal::span(-0.125, 4);
        assert_eq!(span.p0, -1);
        assert_eq!(span.p1, 0);
        assert_eq!(span.g0, 0.5);
        assert_eq!(span.g1, -0.5);
    }

    #[test]
    fn test_normal_span_on_lattice_point() {
        let span = LatticeNormal::span(0.5, 4);
        assert_eq!(span.p0, 2);
        assert_eq!(span.g0, 0.0);
        assert_eq!(span.t, 0.0);
    }

    #[test]
    fn test_normal_span_saturated_coordinate() {
        let span = LatticeNormal::span(3.0e9, 1);
        assert_eq!(span.p0, i32::MAX);
        assert_eq!(span.p1, i32::MIN);
        assert!(span.g0.is_finite());

        // 4.0 at frequency 2^29 lands exactly on 2^31
        let span = LatticeNormal::span(4.0, 1 << 29);
        assert_eq!(span.p0, i32::MAX);
        assert_eq!(span.p1, i32::MIN);
    }

    #[test]
    fn test_tiling_span_wraps_upper_neighbor() {
        let span = LatticeTiling::span(0.875, 4);
        assert_eq!(span.p0, 3);
        assert_eq!(span.p1, 0);
        assert_eq!(span.g0, 0.5);
    }

    #[test]
    fn test_tiling_span_wraps_negative() {
        let span = LatticeTiling::span(-0.125, 4);
        assert_eq!(span.p0, 3);
        assert_eq!(span.p1, 0);
        assert_eq!(span.g0, 0.5);
        assert_eq!(span.g1, -0.5);
    }

    #[test]
    fn test_tiling_span_periodic() {
        for i in 0..64 {
            let x = i as f32 / 64.0;
            for shift in [-2.0f32, -1.0, 1.0, 3.0] {
                let a = LatticeTiling::span(x, 8);
                let b = LatticeTiling::span(x + shift, 8);
                assert_eq!(a.p0, b.p0);
                assert_eq!(a.p1, b.p1);
                assert_eq!(a.t, b.t);
                assert_eq!(a.g0, b.g0);
            }
        }
    }

    #[test]
    fn test_tiling_frequency_one() {
        let span = LatticeTiling::span(0.25, 1);
        assert_eq!(span.p0, 0);
        assert_eq!(span.p1, 0);
    }

    #[test]
    fn test_spans_agree_inside_first_period() {
        for i in 0..32 {
            let x = i as f32 / 40.0;
            let normal = LatticeNormal::span(x, 4);
            let tiling = LatticeTiling::span(x, 4);
            assert_eq!(normal.p0, tiling.p0);
            assert_eq!(normal.t, tiling.t);
            assert_eq!(normal.g0, tiling.g0);
        }
    }
}
