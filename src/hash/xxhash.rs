//! XXH3-64 hash pair (feature `xxhash`).
//!
//! Faster than the FNV pair on long keys. Both halves are XXH3-64 with
//! different seeds, which xxHash documents as independent functions.
//!
//! ```
//! use siftbloom::hash::XxHasher;
//! use siftbloom::SiftBloom;
//!
//! let filter = SiftBloom::with_hasher(10_000, 5, XxHasher::new()).unwrap();
//! filter.add("fast");
//! assert!(filter.contains("fast"));
//! assert_eq!(filter.hasher_name(), "XXH3-64");
//! ```

#![allow(clippy::module_name_repetitions)]

use super::hasher::BloomHasher;
use xxhash_rust::xxh3::xxh3_64_with_seed;

const SECOND_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded XXH3-64 pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Hasher with seed 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// Hasher with an explicit seed; different seeds give unrelated positions.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes_pair(&self, bytes: &[u8]) -> (u64, u64) {
        let h1 = xxh3_64_with_seed(bytes, self.seed);
        let h2 = xxh3_64_with_seed(bytes, self.seed.wrapping_add(SECOND_SEED_OFFSET));
        (h1, h2)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XXH3-64"
    }
}
