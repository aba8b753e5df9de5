//! Base hash pair used for double hashing.
//!
//! A [`BloomHasher`] turns the encoded bytes of an element into two 64-bit
//! base hashes `(h1, h2)`. Index derivation lives in
//! [`strategies`](super::strategies); bit storage lives in the filter.
//!
//! # Examples
//!
//! ```
//! use siftbloom::hash::{BloomHasher, FnvHasher};
//!
//! let hasher = FnvHasher::new();
//! let (h1, h2) = hasher.hash_bytes_pair(b"hello");
//! assert_ne!(h1, h2);
//! ```
//!
//! # References
//!
//! - Fowler, Noll, Vo: "FNV Hash" (<http://www.isthe.com/chongo/tech/comp/fnv/>)

#![allow(clippy::module_name_repetitions)]

/// FNV 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Source of two base hashes for Kirsch–Mitzenmacher double hashing.
///
/// Implementations must be deterministic for the lifetime of a filter and the
/// two outputs must come from distinct, non-correlated functions. Hash quality
/// only affects the false positive rate, never correctness.
pub trait BloomHasher: Send + Sync {
    /// Hash `bytes` into the pair `(h1, h2)`.
    fn hash_bytes_pair(&self, bytes: &[u8]) -> (u64, u64);

    /// Human-readable name for `Debug` output and diagnostics.
    fn name(&self) -> &'static str;
}

/// 64-bit FNV-1: multiply, then xor.
#[must_use]
#[inline]
pub fn fnv1_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        hash.wrapping_mul(FNV_PRIME) ^ u64::from(byte)
    })
}

/// 64-bit FNV-1a: xor, then multiply.
#[must_use]
#[inline]
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Murmur3 64-bit finalizer.
///
/// Raw FNV-1 and FNV-1a outputs for similar inputs are correlated, which
/// shows up as a false positive rate several times the theoretical one.
#[must_use]
#[inline]
pub fn mix_hash(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// Default hasher: `h1` is FNV-1, `h2` is FNV-1a, each passed through
/// [`mix_hash`].
///
/// Both are stable across processes and platforms, so positions computed for
/// an element never change between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnvHasher;

impl FnvHasher {
    /// Create the default FNV pair.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BloomHasher for FnvHasher {
    #[inline]
    fn hash_bytes_pair(&self, bytes: &[u8]) -> (u64, u64) {
        (mix_hash(fnv1_64(bytes)), mix_hash(fnv1a_64(bytes)))
    }

    #[inline]
    fn name(&self) -> &'static str {
        "FNV-1/FNV-1a"
    }
}

impl<H: BloomHasher + ?Sized> BloomHasher for &H {
    #[inline]
    fn hash_bytes_pair(&self, bytes: &[u8]) -> (u64, u64) {
        (**self).hash_bytes_pair(bytes)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
