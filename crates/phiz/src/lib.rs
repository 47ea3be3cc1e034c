//! Small, fast, deterministic 32-bit pseudo-random number generator.
//!
//! The generator walks a golden-ratio Weyl sequence over a single `u32` and
//! derives each output with one rotate-multiply followed by an xor-fold. The
//! stored state is the pre-mixing Weyl value, so every seed has the full
//! period of 2^32 regardless of how the output mixing behaves.
//!
//! This is **not** cryptographic.
//!
//! ## Example
//!
//! ```rust
//! use phiz::{phiz_fn, DeterministicRng, PhiZ};
//!
//! let mut rng = PhiZ::new(0);
//! let mut next = phiz_fn(0);
//!
//! assert_eq!(rng.next_u32(), 0xA2BC_F603);
//! assert_eq!(next(), 0xA2BC_F603);
//!
//! let roll = rng.next_in_range(1, 7);
//! assert!((1..7).contains(&roll));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod closure;
pub mod rng;
pub mod seed;
pub mod stats;
pub mod step;

#[cfg(feature = "rand_core")]
mod rand_impl;

pub use closure::{phiz_fn, phiz_fn_default};
pub use rng::{DeterministicRng, PhiZ};
pub use seed::{parse_seed, wrap_f64, wrap_i64, SeedError};
pub use stats::{chi_square_u32, ChiSquare, StatsError};
pub use step::{advance, mix, step, weyl_state_after, WEYL_INCREMENT};
