//! Concurrent Bloom filter over a single `RwLock`-guarded bit array.
//!
//! # Concurrency
//!
//! One `parking_lot::RwLock<BitArray>` guards every bit:
//!
//! - [`add`](SiftBloom::add), [`add_batch`](SiftBloom::add_batch) and
//!   [`clear`](SiftBloom::clear) take it exclusively.
//! - [`contains`](SiftBloom::contains) and the statistics take it shared.
//!
//! Encoding and hashing happen before the lock is taken, so the critical
//! section is only the `k` bit reads or writes. Capacity and hash fanout never
//! change and are read without locking. `parking_lot` keeps writers from
//! starving behind a steady stream of readers.
//!
//! Every operation is linearizable with respect to the lock: an `add` that
//! returned before a `contains` started is always observed, and a `contains`
//! that overlaps an `add` sees either none or all of its bits.
//!
//! # Examples
//!
//! ```
//! use siftbloom::SiftBloom;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(SiftBloom::new(10_000, 5).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 filter.add(&format!("worker-{t}-item-{i}"));
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(filter.contains("worker-3-item-99"));
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::params::validate_hash_fanout;
use crate::core::BitArray;
use crate::encode::{Element, Encoder};
use crate::error::Result;
use crate::hash::{BloomHasher, DoubleHashing, FnvHasher};
use parking_lot::RwLock;
use std::fmt;

/// Thread-safe Bloom filter with double hashing.
///
/// Answers "possibly present" or "definitely absent". Elements can only be
/// added, never removed; [`clear`](Self::clear) empties the whole filter.
///
/// Share it between threads with `Arc<SiftBloom>`. All operations take `&self`.
pub struct SiftBloom<H = FnvHasher>
where
    H: BloomHasher,
{
    bits: RwLock<BitArray>,

    /// Capacity in bits (m). Duplicated from the array for lock-free reads.
    capacity_bits: usize,

    /// Positions per element (k).
    hash_fanout: usize,

    hasher: H,
}

impl SiftBloom<FnvHasher> {
    /// Create an empty filter of `capacity_bits` bits using `hash_fanout`
    /// positions per element, hashed with the FNV-1/FNV-1a pair.
    ///
    /// # Errors
    ///
    /// - `capacity_bits == 0` → [`SiftBloomError::InvalidSize`](crate::SiftBloomError::InvalidSize)
    /// - `hash_fanout == 0` →
    ///   [`SiftBloomError::InvalidHashFanout`](crate::SiftBloomError::InvalidHashFanout)
    ///
    /// ```
    /// use siftbloom::{SiftBloom, SiftBloomError};
    ///
    /// let filter = SiftBloom::new(1000, 5).unwrap();
    /// assert_eq!(filter.size(), 1000);
    ///
    /// assert_eq!(
    ///     SiftBloom::new(0, 5).unwrap_err(),
    ///     SiftBloomError::InvalidSize { size: 0 }
    /// );
    /// assert!(SiftBloom::new(1000, 0).is_err());
    /// ```
    pub fn new(capacity_bits: usize, hash_fanout: usize) -> Result<Self> {
        Self::with_hasher(capacity_bits, hash_fanout, FnvHasher::new())
    }
}

impl<H: BloomHasher> SiftBloom<H> {
    /// Create an empty filter with a specific hasher.
    ///
    /// # Errors
    ///
    /// Same as [`SiftBloom::new`].
    pub fn with_hasher(capacity_bits: usize, hash_fanout: usize, hasher: H) -> Result<Self> {
        let bits = BitArray::new(capacity_bits)?;
        validate_hash_fanout(hash_fanout)?;

        #[cfg(feature = "trace")]
        tracing::debug!(
            capacity_bits,
            hash_fanout,
            hasher = hasher.name(),
            "SiftBloom::new"
        );

        Ok(Self {
            bits: RwLock::new(bits),
            capacity_bits,
            hash_fanout,
            hasher,
        })
    }

    #[inline]
    fn base_hashes<E: Element + ?Sized>(&self, element: &E) -> (u64, u64) {
        let mut enc = Encoder::new();
        element.encode(&mut enc);
        self.hasher.hash_bytes_pair(enc.as_bytes())
    }

    /// Record `element` as present. Idempotent.
    ///
    /// ```
    /// use siftbloom::SiftBloom;
    ///
    /// let filter = SiftBloom::new(1000, 5).unwrap();
    /// filter.add("hello");
    /// filter.add(&123);
    /// filter.add(&45.67);
    /// assert!(filter.contains("hello"));
    /// ```
    pub fn add<E: Element + ?Sized>(&self, element: &E) {
        #[cfg(feature = "trace")]
        tracing::trace!("SiftBloom::add");

        let (h1, h2) = self.base_hashes(element);

        let mut bits = self.bits.write();
        for position in DoubleHashing::positions(h1, h2, self.hash_fanout, self.capacity_bits) {
            bits.set(position, true);
        }
    }

    /// Whether `element` is possibly present.
    ///
    /// `false` is definite; `true` may be a false positive. Stops at the
    /// first unset bit.
    ///
    /// ```
    /// use siftbloom::SiftBloom;
    ///
    /// let filter = SiftBloom::new(1000, 5).unwrap();
    /// assert!(!filter.contains("world"));
    /// filter.add("world");
    /// assert!(filter.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<E: Element + ?Sized>(&self, element: &E) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!("SiftBloom::contains");

        let (h1, h2) = self.base_hashes(element);

        let bits = self.bits.read();
        DoubleHashing::positions(h1, h2, self.hash_fanout, self.capacity_bits)
            .all(|position| bits.get(position))
    }

    /// Reset the filter to empty.
    ///
    /// Waits for exclusive access (never skipped), then swaps in a zeroed
    /// array of the same capacity. Hash fanout is unchanged.
    ///
    /// ```
    /// use siftbloom::SiftBloom;
    ///
    /// let filter = SiftBloom::new(1000, 5).unwrap();
    /// filter.add("hello");
    /// filter.clear();
    /// assert!(!filter.contains("hello"));
    /// assert_eq!(filter.hash_fanout(), 5);
    /// ```
    pub fn clear(&self) {
        #[cfg(feature = "trace")]
        tracing::debug!(capacity_bits = self.capacity_bits, "SiftBloom::clear");

        let mut bits = self.bits.write();
        *bits = bits.zeroed_like();
    }

    /// Capacity in bits (m).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.capacity_bits
    }

    /// Positions set per element (k).
    #[must_use]
    #[inline]
    pub fn hash_fanout(&self) -> usize {
        self.hash_fanout
    }

    /// Add every element of `items` under a single write lock.
    ///
    /// Hashing is done up front, outside the lock.
    ///
    /// ```
    /// use siftbloom::SiftBloom;
    ///
    /// let filter = SiftBloom::new(10_000, 5).unwrap();
    /// filter.add_batch(["a", "b", "c"]);
    /// assert!(filter.contains_all(["a", "b", "c"]));
    /// ```
    pub fn add_batch<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: Element,
    {
        let hashes: Vec<(u64, u64)> = items
            .into_iter()
            .map(|item| self.base_hashes(&item))
            .collect();

        #[cfg(feature = "trace")]
        tracing::trace!(batch_len = hashes.len(), "SiftBloom::add_batch");

        if hashes.is_empty() {
            return;
        }

        let mut bits = self.bits.write();
        for (h1, h2) in hashes {
            for position in DoubleHashing::positions(h1, h2, self.hash_fanout, self.capacity_bits) {
                bits.set(position, true);
            }
        }
    }

    /// Whether every element of `items` is possibly present.
    ///
    /// Each element takes the read lock on its own; an empty iterator yields `true`.
    #[must_use]
    pub fn contains_all<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Element,
    {
        items.into_iter().all(|item| self.contains(&item))
    }

    /// Whether at least one element of `items` is possibly present.
    #[must_use]
    pub fn contains_any<I>(&self, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Element,
    {
        items.into_iter().any(|item| self.contains(&item))
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.read().count_ones()
    }

    /// Whether no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.read().is_clear()
    }

    /// Fraction of set bits, in `[0, 1]`.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.count_ones() as f64 / self.capacity_bits as f64
    }

    /// Estimated number of distinct elements added.
    ///
    /// `n ≈ -(m/k) · ln(1 - X/m)` for `X` set bits. Saturated filters report `m`.
    #[must_use]
    pub fn estimate_count(&self) -> usize {
        let ones = self.count_ones();
        if ones == 0 {
            return 0;
        }

        let m = self.capacity_bits as f64;
        let k = self.hash_fanout as f64;
        let fill_ratio = ones as f64 / m;
        if fill_ratio >= 1.0 {
            return self.capacity_bits;
        }

        ((-m / k) * (1.0 - fill_ratio).ln()).round() as usize
    }

    /// Current false positive probability, estimated from the fill ratio.
    ///
    /// Zero for an empty filter, one for a saturated one.
    #[must_use]
    pub fn false_positive_rate(&self) -> f64 {
        let ones = self.count_ones();
        if ones == 0 {
            return 0.0;
        }

        let fill_rate = ones as f64 / self.capacity_bits as f64;
        if fill_rate >= 1.0 {
            return 1.0;
        }

        let m = self.capacity_bits as f64;
        let k = self.hash_fanout as f64;
        let estimated_n = -(m / k) * (1.0 - fill_rate).ln();
        (1.0 - (-k * estimated_n / m).exp()).powf(k)
    }

    /// Name of the hasher in use.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Approximate heap plus inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.bits.read().memory_usage()
    }

    /// Copy of the current bits, taken under the read lock.
    ///
    /// ```
    /// use siftbloom::SiftBloom;
    ///
    /// let filter = SiftBloom::new(256, 3).unwrap();
    /// filter.add("x");
    /// let snapshot = filter.snapshot();
    /// filter.clear();
    /// assert_eq!(snapshot.size(), 256);
    /// assert!(!snapshot.is_clear());
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> BitArray {
        self.bits.read().clone()
    }
}

impl<H: BloomHasher + Clone> Clone for SiftBloom<H> {
    /// Independent deep copy; later writes to either filter are not shared.
    fn clone(&self) -> Self {
        Self {
            bits: RwLock::new(self.snapshot()),
            capacity_bits: self.capacity_bits,
            hash_fanout: self.hash_fanout,
            hasher: self.hasher.clone(),
        }
    }
}

impl<H: BloomHasher> fmt::Debug for SiftBloom<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiftBloom")
            .field("capacity_bits", &self.capacity_bits)
            .field("hash_fanout", &self.hash_fanout)
            .field("hasher", &self.hasher.name())
            .field("load_factor", &self.load_factor())
            .finish()
    }
}

impl<H: BloomHasher> fmt::Display for SiftBloom<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SiftBloom({} bits, k={}, load={:.1}%, FPR={:.4}%)",
            self.capacity_bits,
            self.hash_fanout,
            self.load_factor() * 100.0,
            self.false_positive_rate() * 100.0
        )
    }
}
