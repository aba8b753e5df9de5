//! Builder for [`SiftBloom`] filters.
//!
//! A filter is sized either explicitly or from a target workload:
//!
//! ```text
//! explicit:  .capacity_bits(m) + .hash_fanout(k)
//! derived:   .expected_items(n) + .false_positive_rate(p)   → core::params
//! ```
//!
//! Mixing the two, or leaving either pair incomplete, fails at
//! [`build`](SiftBloomBuilder::build) with
//! [`SiftBloomError::InvalidParameters`].
//!
//! # Examples
//!
//! ## Derived sizing
//!
//! ```
//! use siftbloom::SiftBloomBuilder;
//!
//! let filter = SiftBloomBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.hash_fanout(), 7);
//! ```
//!
//! ## Explicit sizing with another hasher
//!
//! ```
//! use siftbloom::hash::FnvHasher;
//! use siftbloom::SiftBloomBuilder;
//!
//! let filter = SiftBloomBuilder::new()
//!     .capacity_bits(100_000)
//!     .hash_fanout(5)
//!     .hasher(FnvHasher::new())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.size(), 100_000);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use siftbloom::SiftBloomBuilder;
//!
//! let result = SiftBloomBuilder::new()
//!     .capacity_bits(1024)
//!     .expected_items(100)
//!     .build();
//!
//! assert!(result.is_err());
//! ```

use crate::core::params;
use crate::error::{Result, SiftBloomError};
use crate::filter::SiftBloom;
use crate::hash::{BloomHasher, FnvHasher};

/// Step-by-step configuration of a [`SiftBloom`].
///
/// # Type Parameters
///
/// - `H`: hasher the built filter will use (defaults to [`FnvHasher`])
#[derive(Debug, Clone)]
pub struct SiftBloomBuilder<H = FnvHasher> {
    capacity_bits: Option<usize>,
    hash_fanout: Option<usize>,
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    hasher: H,
}

impl SiftBloomBuilder<FnvHasher> {
    /// Builder with nothing set and the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity_bits: None,
            hash_fanout: None,
            expected_items: None,
            fp_rate: None,
            hasher: FnvHasher::new(),
        }
    }
}

impl Default for SiftBloomBuilder<FnvHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BloomHasher> SiftBloomBuilder<H> {
    /// Bit array capacity (m).
    #[must_use]
    pub fn capacity_bits(mut self, bits: usize) -> Self {
        self.capacity_bits = Some(bits);
        self
    }

    /// Positions per element (k).
    #[must_use]
    pub fn hash_fanout(mut self, k: usize) -> Self {
        self.hash_fanout = Some(k);
        self
    }

    /// Expected number of distinct elements (n), for derived sizing.
    #[must_use]
    pub fn expected_items(mut self, n: usize) -> Self {
        self.expected_items = Some(n);
        self
    }

    /// Target false positive rate at `expected_items`, for derived sizing.
    #[must_use]
    pub fn false_positive_rate(mut self, p: f64) -> Self {
        self.fp_rate = Some(p);
        self
    }

    /// Replace the hasher.
    #[must_use]
    pub fn hasher<H2: BloomHasher>(self, hasher: H2) -> SiftBloomBuilder<H2> {
        SiftBloomBuilder {
            capacity_bits: self.capacity_bits,
            hash_fanout: self.hash_fanout,
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hasher,
        }
    }

    /// Resolve `(capacity_bits, hash_fanout)` from whichever pair was set.
    fn resolve(&self) -> Result<(usize, usize)> {
        let explicit = self.capacity_bits.is_some() || self.hash_fanout.is_some();
        let derived = self.expected_items.is_some() || self.fp_rate.is_some();

        match (explicit, derived) {
            (true, true) => Err(SiftBloomError::invalid_parameters(
                "explicit sizing (capacity_bits/hash_fanout) cannot be combined with \
                 derived sizing (expected_items/false_positive_rate)",
            )),
            (false, false) => Err(SiftBloomError::invalid_parameters(
                "no sizing given; set capacity_bits and hash_fanout, \
                 or expected_items and false_positive_rate",
            )),
            (true, false) => match (self.capacity_bits, self.hash_fanout) {
                (Some(m), Some(k)) => Ok((m, k)),
                (None, _) => Err(SiftBloomError::invalid_parameters("capacity_bits is missing")),
                (_, None) => Err(SiftBloomError::invalid_parameters("hash_fanout is missing")),
            },
            (false, true) => match (self.expected_items, self.fp_rate) {
                (Some(n), Some(p)) => params::calculate_filter_params(n, p),
                (None, _) => Err(SiftBloomError::invalid_parameters("expected_items is missing")),
                (_, None) => Err(SiftBloomError::invalid_parameters(
                    "false_positive_rate is missing",
                )),
            },
        }
    }

    /// Build the filter.
    ///
    /// # Errors
    ///
    /// - [`SiftBloomError::InvalidParameters`] for missing or mixed sizing
    /// - any error from [`params::calculate_filter_params`] or [`SiftBloom::with_hasher`]
    pub fn build(self) -> Result<SiftBloom<H>> {
        let (capacity_bits, hash_fanout) = self.resolve()?;
        SiftBloom::with_hasher(capacity_bits, hash_fanout, self.hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_sizing() {
        let filter = SiftBloomBuilder::new()
            .capacity_bits(1000)
            .hash_fanout(5)
            .build()
            .unwrap();
        assert_eq!(filter.size(), 1000);
        assert_eq!(filter.hash_fanout(), 5);
    }

    #[test]
    fn test_explicit_fanout_above_sizing_clamp() {
        let filter = SiftBloomBuilder::new()
            .capacity_bits(1000)
            .hash_fanout(33)
            .build()
            .unwrap();
        assert_eq!(filter.hash_fanout(), 33);
    }

    #[test]
    fn test_derived_sizing() {
        let filter = SiftBloomBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        let (m, k) = params::calculate_filter_params(1000, 0.01).unwrap();
        assert_eq!(filter.size(), m);
        assert_eq!(filter.hash_fanout(), k);
    }

    #[test]
    fn test_nothing_set() {
        assert!(matches!(
            SiftBloomBuilder::new().build(),
            Err(SiftBloomError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_mixed_sizing_rejected() {
        let err = SiftBloomBuilder::new()
            .capacity_bits(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_incomplete_pairs() {
        let err = SiftBloomBuilder::new().capacity_bits(1000).build().unwrap_err();
        assert_eq!(err, SiftBloomError::invalid_parameters("hash_fanout is missing"));

        let err = SiftBloomBuilder::new().hash_fanout(3).build().unwrap_err();
        assert_eq!(err, SiftBloomError::invalid_parameters("capacity_bits is missing"));

        let err = SiftBloomBuilder::new().expected_items(10).build().unwrap_err();
        assert_eq!(
            err,
            SiftBloomError::invalid_parameters("false_positive_rate is missing")
        );
    }

    #[test]
    fn test_errors_from_filter_and_params_pass_through() {
        assert!(SiftBloomBuilder::new()
            .capacity_bits(0)
            .hash_fanout(3)
            .build()
            .unwrap_err()
            .is_invalid_size());

        assert!(matches!(
            SiftBloomBuilder::new()
                .expected_items(100)
                .false_positive_rate(1.5)
                .build(),
            Err(SiftBloomError::FalsePositiveRateOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_custom_hasher_carried_through() {
        #[derive(Debug, Clone, Copy)]
        struct Constant;

        impl BloomHasher for Constant {
            fn hash_bytes_pair(&self, _bytes: &[u8]) -> (u64, u64) {
                (7, 0)
            }

            fn name(&self) -> &'static str {
                "constant"
            }
        }

        let filter = SiftBloomBuilder::new()
            .capacity_bits(64)
            .hash_fanout(3)
            .hasher(Constant)
            .build()
            .unwrap();

        assert_eq!(filter.hasher_name(), "constant");
        filter.add("anything");
        assert_eq!(filter.count_ones(), 1);
        assert!(filter.snapshot().get(7));
    }
}
