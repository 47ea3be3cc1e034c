//! Closure-based entry point.
//!
//! For call sites that want a plain `FnMut() -> u32` instead of a generator
//! handle. The closure owns its state and calls the same [`advance`] as
//! [`PhiZ`](crate::PhiZ), so the two can never drift apart.

use crate::step::advance;

/// Build a zero-argument generator seeded with `seed`.
///
/// The returned closure yields exactly the sequence `PhiZ::new(seed).next_u32()`
/// would. Cloning it forks the stream at the current position.
///
/// ```rust
/// let mut next = phiz::phiz_fn(42);
/// let mut rng = phiz::PhiZ::new(42);
/// assert_eq!(next(), rng.next_u32());
/// ```
pub fn phiz_fn(seed: u32) -> impl FnMut() -> u32 + Clone {
    let mut state = seed;
    move || advance(&mut state)
}

/// [`phiz_fn`] with the default seed of 0.
pub fn phiz_fn_default() -> impl FnMut() -> u32 + Clone {
    phiz_fn(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhiZ;

    #[test]
    fn matches_sampler_sequence() {
        let mut next = phiz_fn(0xDEAD_BEEF);
        let mut rng = PhiZ::new(0xDEAD_BEEF);
        for _ in 0..256 {
            assert_eq!(next(), rng.next_u32());
        }
    }

    #[test]
    fn default_seed_matches_default_sampler() {
        let mut next = phiz_fn_default();
        let mut rng = PhiZ::default();
        assert_eq!(next(), rng.next_u32());
    }

    #[test]
    fn clone_forks_the_stream() {
        let mut next = phiz_fn(7);
        next();
        let mut fork = next.clone();
        assert_eq!(next(), fork());
        assert_eq!(next(), fork());
    }

    #[test]
    fn closures_do_not_share_state() {
        let mut a = phiz_fn(1);
        let mut b = phiz_fn(1);
        let first = a();
        a();
        assert_eq!(b(), first);
    }
}
