//! Rejection-sampled uniform draws
//!
//! A naive `raw % n` folds the 2^64 raw values into `n` buckets that cannot
//! all be the same size unless `n` divides 2^64, so low results come up
//! slightly more often than high ones. This module removes that skew by
//! rejection sampling: raw values at or above the largest multiple of `n`
//! that fits in a `u64` are discarded and redrawn, and only then is the
//! modulo taken.
//!
//! # Termination
//!
//! The rejection loop is unbounded but terminates with probability 1. The
//! rejected region is always smaller than `n`, so the rejection probability
//! is below `n / 2^64` and the expected number of draws is under 2 even for
//! the worst bound (just over half the unsigned space). For realistic
//! bounds the first draw is accepted essentially always.
//!
//! # Signed ranges
//!
//! Signed ranges are shifted into unsigned space by the magnitude of a
//! negative lower bound, sampled there, and shifted back. The shift back
//! subtracts in unsigned space before narrowing whenever the intermediate
//! value exceeds `i64::MAX`, so no step ever overflows a signed integer.

use crate::entropy::{EntropySource, OsEntropy};
use std::ops::{Range, RangeInclusive};
use thiserror::Error;

/// Errors reported by the checked sampling operations
///
/// The panicking operations treat these same conditions as contract
/// violations; [`UniformSampler::try_sample_i64`] surfaces them as values
/// instead, for callers validating externally supplied bounds.
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    /// The signed sampler shifts bounds by the magnitude of the lower
    /// bound, and `i64::MIN` is the one value with no such magnitude.
    #[error("lower bound must be greater than i64::MIN")]
    LowerBoundTooSmall,

    #[error("empty range: lower bound {lower} is not below upper bound {upper}")]
    EmptyRange { lower: i64, upper: i64 },
}

/// Unbiased uniform sampler over 64-bit integer ranges
///
/// Stateless between calls: the only thing a sampler owns is its byte
/// source, and every operation is a pure function of its arguments plus the
/// entropy it draws. [`UniformSampler::new`] wires in [`OsEntropy`]; tests
/// substitute a scripted source through [`UniformSampler::with_source`].
///
/// # Example
/// ```
/// use fairdraw_core::UniformSampler;
///
/// let mut sampler = UniformSampler::new();
/// let value = sampler.sample_u64(100); // [0, 100)
/// assert!(value < 100);
///
/// let signed = sampler.sample_i64(-5, 5); // [-5, 5)
/// assert!(signed >= -5 && signed < 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UniformSampler<S: EntropySource = OsEntropy> {
    /// Where the raw bits come from
    source: S,
}

impl UniformSampler<OsEntropy> {
    /// Create a sampler drawing from the operating system CSPRNG.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let value = sampler.raw_u64();
    /// ```
    pub fn new() -> Self {
        Self { source: OsEntropy }
    }
}

impl<S: EntropySource> UniformSampler<S> {
    /// Create a sampler drawing from the given byte source.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::{ScriptedEntropy, UniformSampler};
    ///
    /// let script = ScriptedEntropy::from_values(&[3]);
    /// let mut sampler = UniformSampler::with_source(script);
    /// assert_eq!(sampler.raw_u64(), 3);
    /// ```
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Draw one full-width random `u64`, every bit uniform and independent.
    ///
    /// Consumes 8 bytes of entropy. No failure conditions.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let value = sampler.raw_u64();
    /// ```
    pub fn raw_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.source.fill_bytes(&mut buf);
        // Little-endian so scripted sources read the same on every platform
        u64::from_le_bytes(buf)
    }

    /// Draw one full-width random `i64`, uniform over the entire signed
    /// range.
    ///
    /// Same entropy consumption as [`raw_u64`](Self::raw_u64); the bits are
    /// reinterpreted as two's-complement.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let value = sampler.raw_i64();
    /// ```
    pub fn raw_i64(&mut self) -> i64 {
        self.raw_u64() as i64
    }

    /// Draw a uniform value in `[0, upper_bound)`.
    ///
    /// Raw draws at or above the largest multiple of `upper_bound` that
    /// fits in a `u64` are rejected and redrawn, so the retained draw lands
    /// in one of exactly `upper_bound` equally sized buckets and the final
    /// modulo introduces no bias.
    ///
    /// # Arguments
    /// * `upper_bound` - Exclusive upper bound
    ///
    /// # Returns
    /// A uniform value in `[0, upper_bound)`, or `0` if `upper_bound` is
    /// `0`. The zero fallback is deliberate: a zero-width request has no
    /// valid nonzero result, and callers legitimately pass the size of an
    /// empty collection.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// assert!(sampler.sample_u64(10) < 10);
    /// assert_eq!(sampler.sample_u64(0), 0);
    /// ```
    pub fn sample_u64(&mut self, upper_bound: u64) -> u64 {
        if upper_bound == 0 {
            return 0;
        }

        // Largest multiple of upper_bound that fits in a u64. Values at or
        // above it would fold unevenly under the modulo below.
        let limit = u64::MAX - u64::MAX % upper_bound;

        let mut raw = self.raw_u64();
        while raw >= limit {
            raw = self.raw_u64();
        }

        raw % upper_bound
    }

    /// Draw a uniform value in `[lower_bound, upper_bound)`.
    ///
    /// Handles any sign combination: straddling zero, entirely positive,
    /// entirely negative, and ranges spanning almost the whole signed
    /// width. The range is shifted into unsigned space by the magnitude of
    /// a negative lower bound, sampled there without bias, and shifted
    /// back.
    ///
    /// # Arguments
    /// * `lower_bound` - Inclusive lower bound; must be greater than
    ///   `i64::MIN`
    /// * `upper_bound` - Exclusive upper bound; must be greater than
    ///   `lower_bound`
    ///
    /// # Panics
    /// Panics if `lower_bound == i64::MIN` or `lower_bound >= upper_bound`.
    /// Both indicate a programming error at the call site; use
    /// [`try_sample_i64`](Self::try_sample_i64) to validate untrusted
    /// bounds without panicking.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let value = sampler.sample_i64(-1_000, 1_100);
    /// assert!(value >= -1_000 && value < 1_100);
    ///
    /// // Single-value range
    /// assert_eq!(sampler.sample_i64(-1, 0), -1);
    /// ```
    pub fn sample_i64(&mut self, lower_bound: i64, upper_bound: i64) -> i64 {
        assert!(
            lower_bound > i64::MIN,
            "lower bound must be greater than i64::MIN"
        );
        assert!(
            lower_bound < upper_bound,
            "lower bound must be less than upper bound"
        );

        // Shift [lower, upper) up into unsigned space. unsigned_abs covers
        // every permitted lower bound; i64::MIN is the one value it could
        // not negate, hence the precondition above.
        let offset: u64 = if lower_bound < 0 {
            lower_bound.unsigned_abs()
        } else {
            0
        };
        let shifted_lower = (lower_bound + offset as i64) as u64;
        // Wrapping add maps a negative upper bound correctly: the shifted
        // bound equals upper + offset, which always lies in (0, 2^64).
        let shifted_upper = (upper_bound as u64).wrapping_add(offset);

        let drawn = self.sample_u64(shifted_upper - shifted_lower) + shifted_lower;

        // Shift back down. A value past i64::MAX must have the offset
        // removed in unsigned space before narrowing; anything smaller can
        // narrow first and subtract in signed space.
        if drawn >= i64::MAX as u64 {
            (drawn - offset) as i64
        } else {
            drawn as i64 - offset as i64
        }
    }

    /// Checked variant of [`sample_i64`](Self::sample_i64).
    ///
    /// Reports the two precondition violations as [`SampleError`] values
    /// instead of panicking; on success the behavior is identical.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::{SampleError, UniformSampler};
    ///
    /// let mut sampler = UniformSampler::new();
    /// assert!(sampler.try_sample_i64(0, 10).is_ok());
    /// assert_eq!(
    ///     sampler.try_sample_i64(10, 0),
    ///     Err(SampleError::EmptyRange { lower: 10, upper: 0 })
    /// );
    /// assert_eq!(
    ///     sampler.try_sample_i64(i64::MIN, 0),
    ///     Err(SampleError::LowerBoundTooSmall)
    /// );
    /// ```
    pub fn try_sample_i64(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
    ) -> Result<i64, SampleError> {
        if lower_bound == i64::MIN {
            return Err(SampleError::LowerBoundTooSmall);
        }
        if lower_bound >= upper_bound {
            return Err(SampleError::EmptyRange {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        Ok(self.sample_i64(lower_bound, upper_bound))
    }

    /// Draw a uniform value from a half-open range.
    ///
    /// Convenience over [`sample_i64`](Self::sample_i64) with the same
    /// contract.
    ///
    /// # Panics
    /// Panics if the range is empty or starts at `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let value = sampler.sample_range(-1_000..1_100);
    /// assert!((-1_000..1_100).contains(&value));
    /// ```
    pub fn sample_range(&mut self, range: Range<i64>) -> i64 {
        self.sample_i64(range.start, range.end)
    }

    /// Draw a uniform value from a closed range.
    ///
    /// A singleton range `x..=x` is valid and always returns `x`.
    ///
    /// # Panics
    /// Panics if `start > end`, if `start == i64::MIN`, or if
    /// `end == i64::MAX` (the exclusive bound `end + 1` must be
    /// representable).
    ///
    /// # Example
    /// ```
    /// use fairdraw_core::UniformSampler;
    ///
    /// let mut sampler = UniformSampler::new();
    /// let roll = sampler.sample_range_inclusive(1..=6);
    /// assert!((1..=6).contains(&roll));
    /// assert_eq!(sampler.sample_range_inclusive(7..=7), 7);
    /// ```
    pub fn sample_range_inclusive(&mut self, range: RangeInclusive<i64>) -> i64 {
        let (start, end) = range.into_inner();
        assert!(start <= end, "start must not exceed end");
        assert!(end < i64::MAX, "inclusive end must be below i64::MAX");
        self.sample_i64(start, end + 1)
    }
}
