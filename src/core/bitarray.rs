//! Fixed-capacity packed bit array.
//!
//! `BitArray` is the leaf storage of a [`SiftBloom`](crate::SiftBloom): a boolean
//! vector addressed by absolute bit position. It knows nothing about hashing or
//! concurrency; the filter wraps it in a `RwLock` and is its only writer.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! Space is `⌈n/64⌉ * 8` bytes for `n` bits. The unused tail bits of the last
//! word are never set.
//!
//! # Examples
//!
//! ```
//! use siftbloom::core::BitArray;
//!
//! let mut bits = BitArray::new(100).unwrap();
//! bits.set(42, true);
//! assert!(bits.get(42));
//! assert!(!bits.get(43));
//!
//! bits.set(42, false);
//! assert!(bits.is_clear());
//! ```

use crate::error::{Result, SiftBloomError};

const WORD_BITS: usize = 64;

/// Packed, fixed-size bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    /// Words, each storing 64 bits.
    blocks: Box<[u64]>,

    /// Capacity in bits.
    len: usize,
}

impl BitArray {
    /// Create a bit array of `capacity_bits` bits, all zero.
    ///
    /// # Errors
    ///
    /// Returns [`SiftBloomError::InvalidSize`] if `capacity_bits` is 0.
    ///
    /// ```
    /// use siftbloom::core::BitArray;
    ///
    /// assert_eq!(BitArray::new(1000).unwrap().size(), 1000);
    /// assert!(BitArray::new(0).is_err());
    /// ```
    pub fn new(capacity_bits: usize) -> Result<Self> {
        if capacity_bits == 0 {
            return Err(SiftBloomError::invalid_size(capacity_bits));
        }

        Ok(Self::zeroed(capacity_bits))
    }

    fn zeroed(capacity_bits: usize) -> Self {
        let num_blocks = capacity_bits.div_ceil(WORD_BITS);
        Self {
            blocks: vec![0u64; num_blocks].into_boxed_slice(),
            len: capacity_bits,
        }
    }

    /// A fresh, all-zero array with the same capacity as `self`.
    ///
    /// Infallible because `self` already holds a validated capacity.
    #[must_use]
    pub fn zeroed_like(&self) -> Self {
        Self::zeroed(self.len)
    }

    /// Capacity in bits.
    #[must_use]
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Set the bit at `position` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= size()`, like slice indexing.
    #[inline]
    pub fn set(&mut self, position: usize, value: bool) {
        assert!(
            position < self.len,
            "BitArray index out of bounds: position={} size={}",
            position,
            self.len
        );

        let mask = 1u64 << (position % WORD_BITS);
        let block = &mut self.blocks[position / WORD_BITS];
        if value {
            *block |= mask;
        } else {
            *block &= !mask;
        }
    }

    /// Read the bit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= size()`.
    #[must_use]
    #[inline]
    pub fn get(&self, position: usize) -> bool {
        assert!(
            position < self.len,
            "BitArray index out of bounds: position={} size={}",
            position,
            self.len
        );

        let mask = 1u64 << (position % WORD_BITS);
        self.blocks[position / WORD_BITS] & mask != 0
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Whether every bit is 0.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }

    /// Number of backing 64-bit words.
    #[must_use]
    #[inline]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Backing words, little-endian bit order within each word.
    ///
    /// Lets a caller that owns persistence serialize the raw storage.
    #[must_use]
    pub fn as_blocks(&self) -> &[u64] {
        &self.blocks
    }

    /// Heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.blocks.len() * std::mem::size_of::<u64>() + std::mem::size_of::<Self>()
    }
}
