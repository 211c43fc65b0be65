//! Small xxHash32-style accumulator.

use std::ops::Add;

use serde::{Deserialize, Serialize};

const PRIME_A: u32 = 0b1001_1110_0011_0111_0111_1001_1011_0001;
const PRIME_B: u32 = 0b1000_0101_1110_1011_1100_1010_0111_0111;
const PRIME_C: u32 = 0b1100_0010_1011_0010_1010_1110_0011_1101;
const PRIME_D: u32 = 0b0010_0111_1101_0100_1110_1011_0010_1111;
const PRIME_E: u32 = 0b0001_0110_0101_0110_0110_0111_1011_0001;

/// Scale mapping a byte lane onto [0, 1].
const BYTE_TO_UNIT: f32 = 1.0 / 255.0;

/// Rotates `data` left by `steps` bits.
///
/// Only the rotations 1..32 are meaningful for the hash; a full-width
/// rotation is rejected in debug builds.
#[inline]
pub fn rotate_left(data: u32, steps: u32) -> u32 {
    debug_assert!(steps < 32, "rotation by {} bits", steps);
    data.rotate_left(steps)
}

/// Raw hash accumulator.
///
/// Every `eat` returns a new accumulator; nothing is mutated in place. The
/// accumulator is never read as a number directly, [`SmallXxHash::finalize`]
/// applies the avalanche mix first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmallXxHash {
    accumulator: u32,
}

impl SmallXxHash {
    /// Starts a hash from an integer seed.
    ///
    /// # Example
    /// ```
    /// use latticenoise::hash::SmallXxHash;
    ///
    /// let a = SmallXxHash::seed(7).eat(3).eat(-2);
    /// let b = SmallXxHash::seed(7).eat(3).eat(-2);
    /// assert_eq!(a.finalize(), b.finalize());
    /// ```
    #[inline]
    pub const fn seed(seed: i32) -> Self {
        Self::from_raw((seed as u32).wrapping_add(PRIME_E))
    }

    /// Wraps an existing accumulator value.
    #[inline]
    pub const fn from_raw(accumulator: u32) -> Self {
        Self { accumulator }
    }

    /// Returns the raw, un-finalized accumulator.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.accumulator
    }

    /// Feeds a 32-bit integer into the hash.
    #[inline]
    pub fn eat(self, data: i32) -> Self {
        let mixed = self
            .accumulator
            .wrapping_add((data as u32).wrapping_mul(PRIME_C));
        Self::from_raw(rotate_left(mixed, 17).wrapping_mul(PRIME_D))
    }

    /// Feeds a single byte into the hash.
    #[inline]
    pub fn eat_byte(self, data: u8) -> Self {
        let mixed = self
            .accumulator
            .wrapping_add((data as u32).wrapping_mul(PRIME_E));
        Self::from_raw(rotate_left(mixed, 11).wrapping_mul(PRIME_A))
    }

    /// Avalanche-mixes the accumulator into the final hash value.
    #[inline]
    pub fn finalize(self) -> u32 {
        avalanche(self.accumulator)
    }

    /// Lowest byte of the finalized value.
    #[inline]
    pub fn bytes_a(self) -> u32 {
        self.finalize() & 255
    }

    #[inline]
    pub fn bytes_b(self) -> u32 {
        (self.finalize() >> 8) & 255
    }

    #[inline]
    pub fn bytes_c(self) -> u32 {
        (self.finalize() >> 16) & 255
    }

    /// Highest byte of the finalized value.
    #[inline]
    pub fn bytes_d(self) -> u32 {
        self.finalize() >> 24
    }

    /// Byte lane A mapped onto [0, 1].
    #[inline]
    pub fn floats01_a(self) -> f32 {
        self.bytes_a() as f32 * BYTE_TO_UNIT
    }

    #[inline]
    pub fn floats01_b(self) -> f32 {
        self.bytes_b() as f32 * BYTE_TO_UNIT
    }

    #[inline]
    pub fn floats01_c(self) -> f32 {
        self.bytes_c() as f32 * BYTE_TO_UNIT
    }

    /// Byte lane D mapped onto [0, 1].
    #[inline]
    pub fn floats01_d(self) -> f32 {
        self.bytes_d() as f32 * BYTE_TO_UNIT
    }
}

/// Raw additive bump of the accumulator, used to decorrelate fractal octaves.
impl Add<i32> for SmallXxHash {
    type Output = SmallXxHash;

    #[inline]
    fn add(self, rhs: i32) -> Self::Output {
        Self::from_raw(self.accumulator.wrapping_add(rhs as u32))
    }
}

#[inline]
fn avalanche(accumulator: u32) -> u32 {
    let mut v = accumulator;
    v ^= v >> 15;
    v = v.wrapping_mul(PRIME_B);
    v ^= v >> 13;
    v = v.wrapping_mul(PRIME_C);
    v ^= v >> 16;
    v
}
