//! Bit storage and parameter math.
//!
//! ```text
//! core/
//! ├── bitarray.rs  - Packed fixed-size bit array
//! ├── params.rs    - Optimal sizing calculations
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ## Using Parameter Calculations
//!
//! ```
//! use siftbloom::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! // 10K items at a 1% false positive rate
//! let m = optimal_bit_count(10_000, 0.01).unwrap();
//! let k = optimal_hash_count(m, 10_000).unwrap();
//!
//! assert_eq!((m, k), (95_851, 7));
//! ```
//!
//! ## Using BitArray Directly
//!
//! ```
//! use siftbloom::core::BitArray;
//!
//! let mut bits = BitArray::new(1000).unwrap();
//! bits.set(42, true);
//! bits.set(999, true);
//!
//! assert!(bits.get(42));
//! assert!(!bits.get(43));
//! assert_eq!(bits.count_ones(), 2);
//! ```

pub mod bitarray;
pub mod params;

pub use bitarray::BitArray;

pub use params::{
    calculate_filter_params, expected_fp_rate, optimal_bit_count, optimal_hash_count,
    MAX_HASH_FANOUT, MIN_HASH_FANOUT,
};
