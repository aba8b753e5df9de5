//! Position derivation by double hashing.
//!
//! For `k` positions derived from two base hashes `h₁`, `h₂` over `m` bits:
//!
//! ```text
//! gᵢ(x) = (h₁(x) + i·h₂(x)) mod m,   i = 0 .. k-1
//! ```
//!
//! Additions and multiplications wrap at 2⁶⁴ before the reduction, so every
//! position is in `[0, m)`. Positions may coincide for small `m` or when
//! `h₂ ≡ 0 (mod m)`; setting or checking a bit twice is a no-op.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]

/// Kirsch–Mitzenmacher double hashing.
///
/// ```
/// use siftbloom::hash::DoubleHashing;
///
/// let positions: Vec<usize> = DoubleHashing::positions(10, 3, 4, 100).collect();
/// assert_eq!(positions, vec![10, 13, 16, 19]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleHashing;

impl DoubleHashing {
    /// Lazily yield the `k` positions for base hashes `(h1, h2)` in an `m`-bit array.
    ///
    /// Lazy so `contains` can stop at the first unset bit.
    ///
    /// # Panics
    ///
    /// Panics if `m == 0` and `k > 0` (division by zero). Filters never build
    /// a zero-capacity array.
    #[inline]
    pub fn positions(h1: u64, h2: u64, k: usize, m: usize) -> Positions {
        Positions {
            next: h1,
            step: h2,
            remaining: k,
            modulus: m as u64,
        }
    }
}

/// Iterator returned by [`DoubleHashing::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    next: u64,
    step: u64,
    remaining: usize,
    modulus: u64,
}

impl Iterator for Positions {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // h1 + i*h2 accumulated incrementally; identical under wrapping arithmetic.
        let position = (self.next % self.modulus) as usize;
        self.next = self.next.wrapping_add(self.step);
        Some(position)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl std::iter::FusedIterator for Positions {}
