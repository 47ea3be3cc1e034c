//! Coarse uniformity diagnostics.
//!
//! A chi-square goodness-of-fit check over equal-width buckets of the `u32`
//! output range. It catches gross bias, nothing subtler.

use thiserror::Error;

/// Upper bound on bucket count, keeps the histogram allocation small.
pub const MAX_BUCKETS: usize = 1 << 20;

/// Minimum expected count per bucket for the approximation to hold.
const MIN_EXPECTED: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("bucket count {0} must be between 2 and {max}", max = MAX_BUCKETS)]
    Buckets(usize),

    #[error("no samples")]
    NoSamples,

    #[error(
        "{samples} samples is too few for {buckets} buckets (need at least {min} per bucket)",
        min = MIN_EXPECTED
    )]
    TooFewSamples { samples: u64, buckets: usize },
}

/// Result of a chi-square test against the uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub buckets: usize,
    pub samples: u64,
}

impl ChiSquare {
    /// Upper critical value at standard score `z`, via the Wilson–Hilferty
    /// cube-root approximation. `z = 3.09` is roughly p = 0.001.
    pub fn critical_value(&self, z: f64) -> f64 {
        let k = self.degrees_of_freedom as f64;
        let a = 2.0 / (9.0 * k);
        k * (1.0 - a + z * a.sqrt()).powi(3)
    }

    /// True when uniformity is not rejected at standard score `z`.
    pub fn passes(&self, z: f64) -> bool {
        self.statistic <= self.critical_value(z)
    }
}

/// Bucket index for `value` among `buckets` equal slices of the `u32` range.
#[inline]
fn bucket_of(value: u32, buckets: usize) -> usize {
    ((u64::from(value) * buckets as u64) >> 32) as usize
}

pub fn chi_square_u32<I>(samples: I, buckets: usize) -> Result<ChiSquare, StatsError>
where
    I: IntoIterator<Item = u32>,
{
    if !(2..=MAX_BUCKETS).contains(&buckets) {
        return Err(StatsError::Buckets(buckets));
    }

    let mut counts = vec![0u64; buckets];
    let mut total = 0u64;
    for value in samples {
        counts[bucket_of(value, buckets)] += 1;
        total += 1;
    }

    if total == 0 {
        return Err(StatsError::NoSamples);
    }
    if total < MIN_EXPECTED * buckets as u64 {
        return Err(StatsError::TooFewSamples {
            samples: total,
            buckets,
        });
    }

    let expected = total as f64 / buckets as f64;
    let statistic: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let result = ChiSquare {
        statistic,
        degrees_of_freedom: buckets - 1,
        buckets,
        samples: total,
    };
    tracing::debug!(
        statistic = result.statistic,
        dof = result.degrees_of_freedom,
        samples = result.samples,
        "chi-square computed"
    );
    Ok(result)
}
