//! Error types for SiftBloom operations.
//!
//! Only construction can fail. Once a [`SiftBloom`](crate::SiftBloom) exists,
//! `add`, `contains` and `clear` are total and never return an error.
//!
//! # Error Propagation
//!
//! ```
//! use siftbloom::{Result, SiftBloom};
//!
//! fn session_filter(bits: usize) -> Result<SiftBloom> {
//!     let filter = SiftBloom::new(bits, 3)?;
//!     filter.add("session:alice");
//!     Ok(filter)
//! }
//! # assert!(session_filter(1024).is_ok());
//! # assert!(session_filter(0).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiftBloomError>;

/// Errors that can occur while constructing a filter or its parts.
///
/// `Clone` + `PartialEq` let callers and tests compare errors directly.
#[derive(Debug, Clone, PartialEq)]
pub enum SiftBloomError {
    /// Bit array capacity is not a positive number of bits.
    InvalidSize {
        /// The rejected capacity in bits.
        size: usize,
    },

    /// Hash fanout (k) is outside the supported range.
    ///
    /// A fanout of zero would make every element "present".
    InvalidHashFanout {
        /// The rejected fanout.
        count: usize,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
    },

    /// Builder was given missing or conflicting parameters.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate out of the open interval (0, 1).
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Expected item count is zero.
    InvalidItemCount {
        /// The rejected count.
        count: usize,
    },

    /// A value could not be serialized into an element encoding.
    Serialization {
        /// Message from the serializer.
        message: String,
    },
}

impl fmt::Display for SiftBloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(
                    f,
                    "Invalid array size: {} bits. Size must be greater than 0.",
                    size
                )
            }
            Self::InvalidHashFanout { count, min, max } if *max == usize::MAX => {
                write!(f, "Invalid hash fanout: {}. Must be at least {}.", count, min)
            }
            Self::InvalidHashFanout { count, min, max } => {
                write!(
                    f,
                    "Invalid hash fanout: {}. Must be in range [{}, {}].",
                    count, min, max
                )
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid filter parameters: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for SiftBloomError {}

impl SiftBloomError {
    /// Create an `InvalidSize` error.
    #[must_use]
    pub fn invalid_size(size: usize) -> Self {
        Self::InvalidSize { size }
    }

    /// Create an `InvalidHashFanout` error.
    #[must_use]
    pub fn invalid_hash_fanout(count: usize, min: usize, max: usize) -> Self {
        Self::InvalidHashFanout { count, min, max }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// ```
    /// use siftbloom::SiftBloomError;
    ///
    /// let err = SiftBloomError::invalid_parameters("capacity_bits and expected_items both set");
    /// assert!(err.to_string().contains("both set"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create a `Serialization` error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether this error reports an invalid bit array size.
    #[must_use]
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, Self::InvalidSize { .. })
    }
}
