//! Parameter math for sizing a filter.
//!
//! Given:
//! - `n`: expected number of elements
//! - `ε`: target false positive rate
//!
//! Optimal parameters:
//! - `m = -n × ln(ε) / (ln 2)²` (bits)
//! - `k = (m/n) × ln 2` (hash fanout)
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! A [`SiftBloom`](crate::SiftBloom) never enforces these numbers; they only
//! help a caller pick `capacity_bits` and `hash_fanout`. The builder uses them
//! when configured with `expected_items` and `false_positive_rate`.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, SiftBloomError};
use std::f64::consts::LN_2;

const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Smallest filter the derived sizing will produce.
pub const MIN_FILTER_SIZE: usize = 8;

/// Smallest accepted hash fanout.
pub const MIN_HASH_FANOUT: usize = 1;

/// Largest fanout [`optimal_hash_count`] will suggest.
///
/// Only the sizing math clamps to this; filters accept any positive fanout.
pub const MAX_HASH_FANOUT: usize = 32;

/// Reject a hash fanout of zero; any positive fanout is accepted.
///
/// # Errors
///
/// Returns [`SiftBloomError::InvalidHashFanout`] when `k == 0`.
pub fn validate_hash_fanout(k: usize) -> Result<()> {
    if k < MIN_HASH_FANOUT {
        return Err(SiftBloomError::invalid_hash_fanout(
            k,
            MIN_HASH_FANOUT,
            usize::MAX,
        ));
    }
    Ok(())
}

/// Optimal number of bits for `n` elements at false positive rate `fp_rate`.
///
/// # Errors
///
/// - `n == 0` → [`SiftBloomError::InvalidItemCount`]
/// - `fp_rate` outside (0, 1) → [`SiftBloomError::FalsePositiveRateOutOfBounds`]
///
/// ```
/// use siftbloom::core::params::optimal_bit_count;
///
/// let m = optimal_bit_count(1000, 0.01).unwrap();
/// assert!(m >= 9585 && m <= 9586);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(SiftBloomError::invalid_item_count(n));
    }

    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(SiftBloomError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = -(n as f64) * fp_rate.ln() / LN2_SQUARED;

    if m > (usize::MAX / 2) as f64 {
        return Err(SiftBloomError::invalid_parameters(format!(
            "calculated filter size {:.0} bits exceeds addressable memory",
            m
        )));
    }

    Ok((m.ceil() as usize).max(MIN_FILTER_SIZE))
}

/// Optimal hash fanout for `m` bits and `n` elements, clamped to the accepted range.
///
/// # Errors
///
/// - `m == 0` → [`SiftBloomError::InvalidSize`]
/// - `n == 0` → [`SiftBloomError::InvalidItemCount`]
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(SiftBloomError::invalid_size(m));
    }

    if n == 0 {
        return Err(SiftBloomError::invalid_item_count(n));
    }

    let k = (m as f64 / n as f64) * LN_2;
    Ok((k.round() as usize).clamp(MIN_HASH_FANOUT, MAX_HASH_FANOUT))
}

/// Expected false positive rate of an `m`-bit filter with fanout `k` after `n` insertions.
///
/// # Errors
///
/// - `m == 0` → [`SiftBloomError::InvalidSize`]
/// - `k == 0` → [`SiftBloomError::InvalidHashFanout`]
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(SiftBloomError::invalid_size(m));
    }
    validate_hash_fanout(k)?;

    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Both optimal parameters at once: `(capacity_bits, hash_fanout)`.
///
/// ```
/// use siftbloom::core::params::calculate_filter_params;
///
/// let (m, k) = calculate_filter_params(1000, 0.01).unwrap();
/// assert!(m >= 9585 && m <= 9586);
/// assert_eq!(k, 7);
/// ```
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_hash_count(m, n)?;
    Ok((m, k))
}
