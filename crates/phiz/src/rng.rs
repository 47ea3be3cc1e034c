//! Stateful sampler over the shared transition function.
//!
//! It is **not** cryptographic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::step;

/// 2^32 as `f64`, the divisor that maps a `u32` into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

pub trait DeterministicRng {
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`. Never returns 1.0; may return 0.0.
    fn next_unit_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Integer in the half-open interval `[min, max)`, rounding toward
    /// negative infinity. Returns `min` when `max <= min`.
    ///
    /// Always consumes exactly one draw.
    fn next_in_range(&mut self, min: i32, max: i32) -> i32 {
        let unit = self.next_unit_f64();
        if max <= min {
            return min;
        }
        let span = f64::from(max) - f64::from(min);
        let value = (unit * span + f64::from(min)).floor() as i32;
        value.min(max - 1)
    }

    /// Bit-compatible with the reference `range()`: truncates toward zero.
    ///
    /// Agrees with [`DeterministicRng::next_in_range`] whenever `min >= 0`.
    /// With negative bounds it over-weights values next to zero and can
    /// return `max` itself when `max <= 0`. Use it only to replay streams
    /// recorded by other implementations.
    fn next_in_range_truncating(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max) - f64::from(min);
        (self.next_unit_f64() * span + f64::from(min)) as i32
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u32() >> 31) == 1
    }
}

/// Weyl/rotate-multiply generator with a single `u32` of state.
///
/// # Properties
///
/// - 32-bit state, 32-bit output
/// - Period: 2^32 for every seed
/// - Same seed, same sequence, on every platform
/// - `Copy`, so a snapshot is just an assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhiZ {
    state: u32,
}

impl PhiZ {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a signed word, reinterpreting its two's-complement bits.
    pub const fn from_i32(seed: i32) -> Self {
        Self::new(seed as u32)
    }

    /// Current pre-mixing Weyl state.
    pub const fn state(&self) -> u32 {
        self.state
    }

    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        step::advance(&mut self.state)
    }

    pub fn fill_u32(&mut self, dest: &mut [u32]) {
        for slot in dest {
            *slot = self.next_u32();
        }
    }
}

impl DeterministicRng for PhiZ {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        PhiZ::next_u32(self)
    }
}

impl From<u32> for PhiZ {
    fn from(seed: u32) -> Self {
        Self::new(seed)
    }
}

impl From<i32> for PhiZ {
    fn from(seed: i32) -> Self {
        Self::from_i32(seed)
    }
}
