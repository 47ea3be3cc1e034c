//! Seed coercion.
//!
//! Generators take a `u32`. Everything else gets there by one of two rules:
//!
//! - **wrapping** ([`wrap_f64`], [`wrap_i64`]): truncate toward zero, then
//!   reduce modulo 2^32. NaN and infinities become 0. Never fails.
//! - **strict** ([`parse_seed`]): textual seeds from config files and the
//!   command line must already name a 32-bit value, signed or unsigned.

use thiserror::Error;

const WORD: f64 = 4_294_967_296.0;

/// Errors produced when a textual seed is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,

    #[error("invalid seed {0:?}: expected a decimal or 0x-prefixed hex integer")]
    Invalid(String),

    #[error("seed {0} is outside the 32-bit range [-2147483648, 4294967295]")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Coerce an arbitrary float to a seed by truncation and wraparound.
pub fn wrap_f64(value: f64) -> u32 {
    if !value.is_finite() {
        tracing::debug!(value, "non-finite seed coerced to 0");
        return 0;
    }
    let truncated = value.trunc();
    let seed = truncated.rem_euclid(WORD) as u32;
    if truncated != value || truncated != f64::from(seed) {
        tracing::debug!(value, seed, "seed wrapped to 32 bits");
    }
    seed
}

/// Coerce a 64-bit integer to a seed, keeping the low 32 bits.
pub fn wrap_i64(value: i64) -> u32 {
    let seed = value as u32;
    if i64::from(seed) != value && i64::from(seed as i32) != value {
        tracing::debug!(value, seed, "seed wrapped to 32 bits");
    }
    seed
}

/// Parse a seed written as decimal (`-1`, `42`) or hex (`0x9E3779B9`).
///
/// Negative decimals down to `i32::MIN` are accepted and reinterpreted as
/// two's complement, matching [`PhiZ::from_i32`](crate::PhiZ::from_i32).
pub fn parse_seed(input: &str) -> Result<u32> {
    let text = input.trim();
    if text.is_empty() {
        return Err(SeedError::Empty);
    }

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedError::Invalid(text.to_string()));
        }
        let significant = hex.trim_start_matches('0');
        if significant.len() > 8 {
            return Err(SeedError::OutOfRange(text.to_string()));
        }
        if significant.is_empty() {
            return Ok(0);
        }
        return u32::from_str_radix(significant, 16)
            .map_err(|_| SeedError::Invalid(text.to_string()));
    }

    let digits = text
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeedError::Invalid(text.to_string()));
    }
    let value: i64 = text
        .parse()
        .map_err(|_| SeedError::OutOfRange(text.to_string()))?;

    if let Ok(unsigned) = u32::try_from(value) {
        Ok(unsigned)
    } else if let Ok(signed) = i32::try_from(value) {
        Ok(signed as u32)
    } else {
        Err(SeedError::OutOfRange(text.to_string()))
    }
}
