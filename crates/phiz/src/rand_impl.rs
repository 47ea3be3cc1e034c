//! `rand_core` interop, so `PhiZ` plugs into the `rand` ecosystem.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::PhiZ;

impl RngCore for PhiZ {
    fn next_u32(&mut self) -> u32 {
        PhiZ::next_u32(self)
    }

    // Low word is drawn first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PhiZ {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        PhiZ::new(u32::from_le_bytes(seed))
    }

    /// Wraps modulo 2^32 instead of expanding through PCG, so
    /// `seed_from_u64(s)` and `PhiZ::new(s as u32)` agree.
    fn seed_from_u64(state: u64) -> Self {
        PhiZ::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_packs_two_draws_low_first() {
        let mut rng = PhiZ::new(0);
        let mut reference = PhiZ::new(0);
        let lo = u64::from(reference.next_u32());
        let hi = u64::from(reference.next_u32());
        assert_eq!(RngCore::next_u64(&mut rng), (hi << 32) | lo);
    }

    #[test]
    fn fill_bytes_is_little_endian_words() {
        let mut rng = PhiZ::new(0);
        let mut buf = [0u8; 8];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf[..4], 0xA2BC_F603u32.to_le_bytes());
        assert_eq!(buf[4..], 0x977F_C583u32.to_le_bytes());
    }

    #[test]
    fn seeding_matches_native_constructors() {
        assert_eq!(PhiZ::from_seed(42u32.to_le_bytes()), PhiZ::new(42));
        assert_eq!(PhiZ::seed_from_u64((1 << 32) | 42), PhiZ::new(42));
    }
}
