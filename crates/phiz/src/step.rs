//! The transition function shared by every entry point.
//!
//! All arithmetic here is modulo 2^32. The stored state only ever receives the
//! Weyl increment; the rotate-multiply and xor-fold work on a local copy.

/// Golden-ratio Weyl increment (`floor(2^32 / phi)`, forced odd).
pub const WEYL_INCREMENT: u32 = 0x9E37_79B9;

/// Derive an output word from an already-incremented Weyl state.
#[inline(always)]
pub const fn mix(weyl: u32) -> u32 {
    // For a 32-bit word, rotating by 16 in either direction is the same.
    let mixed = weyl.wrapping_mul(weyl.rotate_left(16));
    mixed ^ (mixed >> 16)
}

/// Pure transition: `state -> (new_state, output)`.
#[inline(always)]
pub const fn step(state: u32) -> (u32, u32) {
    let next = state.wrapping_add(WEYL_INCREMENT);
    (next, mix(next))
}

/// Advance `state` in place and return the output word.
///
/// This is the only place generator state is written.
#[inline(always)]
pub fn advance(state: &mut u32) -> u32 {
    let (next, out) = step(*state);
    *state = next;
    out
}

/// Pre-mixing state after `n` steps from `seed`, without stepping.
pub const fn weyl_state_after(seed: u32, n: u64) -> u32 {
    // Only the low 32 bits of `n` survive the modular product.
    seed.wrapping_add(WEYL_INCREMENT.wrapping_mul(n as u32))
}
