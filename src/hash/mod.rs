//! Hash functions and position derivation.
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait, FnvHasher (default)
//! ├── strategies.rs  - Double hashing positions
//! ├── xxhash.rs      - XxHasher (optional, feature = "xxhash")
//! └── mod.rs         - This file (public API)
//! ```
//!
//! # Choosing a Hash Function
//!
//! | Hash Function | Speed  | Use Case                                  |
//! |---------------|--------|-------------------------------------------|
//! | [`FnvHasher`] | Medium | Default, short keys, no extra dependency  |
//! | `XxHasher`    | Fast   | Long keys (feature `xxhash`)              |
//!
//! Neither is cryptographic. An adversary who can choose elements can drive
//! up the false positive rate; correctness (no false negatives) is unaffected.
//!
//! # Examples
//!
//! ```
//! use siftbloom::hash::{BloomHasher, DoubleHashing, FnvHasher};
//!
//! let (h1, h2) = FnvHasher::new().hash_bytes_pair(b"hello");
//! let positions: Vec<usize> = DoubleHashing::positions(h1, h2, 5, 1000).collect();
//!
//! assert_eq!(positions.len(), 5);
//! assert!(positions.iter().all(|&p| p < 1000));
//! ```

pub mod hasher;
pub mod strategies;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use hasher::{fnv1_64, fnv1a_64, mix_hash, BloomHasher, FnvHasher};
pub use strategies::{DoubleHashing, Positions};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;
