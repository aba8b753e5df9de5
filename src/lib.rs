//! SiftBloom: a concurrent Bloom filter for Rust.
//!
//! A Bloom filter is a space-efficient probabilistic set. It can produce:
//! - **False positives**: may report an element as present when it isn't
//! - **Zero false negatives**: if it reports an element as absent, it is
//!
//! [`SiftBloom`] stores its bits in a packed [`BitArray`](core::BitArray)
//! guarded by one `parking_lot::RwLock`, and derives `k` positions per element
//! from two base hashes (Kirsch–Mitzenmacher double hashing).
//!
//! # Quick Start
//!
//! ```
//! use siftbloom::SiftBloom;
//!
//! // 1000 bits, 5 positions per element
//! let filter = SiftBloom::new(1000, 5).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//! filter.add(&123);
//! filter.add(&45.67);
//!
//! assert!(filter.contains("hello"));
//! assert!(filter.contains(&123));
//! assert!(!filter.contains("goodbye")); // definitely not present
//!
//! filter.clear();
//! assert!(!filter.contains("hello"));
//! ```
//!
//! # Sharing Between Threads
//!
//! Every operation takes `&self`; wrap the filter in an `Arc`:
//!
//! ```
//! use siftbloom::SiftBloom;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(SiftBloom::new(10_000, 5).unwrap());
//!
//! let writer = Arc::clone(&filter);
//! std::thread::spawn(move || writer.add("from another thread"))
//!     .join()
//!     .unwrap();
//!
//! assert!(filter.contains("from another thread"));
//! ```
//!
//! # What Can Be Stored
//!
//! Anything implementing [`Element`]: strings, integers (all widths share one
//! encoding), floats, booleans, byte strings, tuples, options, and your own
//! structs through [`element_record!`]. See [`encode`] for the exact forms.
//!
//! ```
//! use siftbloom::{element_record, SiftBloom};
//!
//! struct Person {
//!     name: String,
//! }
//!
//! element_record!(Person { name });
//!
//! let filter = SiftBloom::new(1000, 5).unwrap();
//! filter.add(&true);
//! filter.add(b"raw bytes");
//! filter.add(&Person { name: "John".into() });
//! assert!(filter.contains(&Person { name: "John".into() }));
//! ```
//!
//! # Sizing
//!
//! ```
//! use siftbloom::SiftBloomBuilder;
//!
//! let filter = SiftBloomBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert!(filter.size() > 95_000);
//! ```
//!
//! # Features
//!
//! - `trace` (default) - `tracing` events on construction, add, contains and clear
//! - `xxhash` - [`XxHasher`](hash::XxHasher), an XXH3-based alternative hasher
//! - `serde` - [`Serialized`](encode::Serialized), any `Serialize` value as an element

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit storage and sizing math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Element encoding
pub mod encode;

/// Hash functions and position derivation
pub mod hash;

/// The concurrent filter
pub mod filter;

/// Filter builder
pub mod builder;

pub use builder::SiftBloomBuilder;
pub use encode::{Element, Encoder};
pub use error::{Result, SiftBloomError};
pub use filter::SiftBloom;
pub use hash::BloomHasher;

/// Prelude module for convenient imports.
///
/// ```
/// use siftbloom::prelude::*;
///
/// let filter: SiftBloom = SiftBloom::new(1000, 5).unwrap();
/// filter.add("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::SiftBloomBuilder;
    pub use crate::core::BitArray;
    pub use crate::element_record;
    pub use crate::encode::{Element, Encoder};
    pub use crate::error::{Result, SiftBloomError};
    pub use crate::filter::SiftBloom;
    pub use crate::hash::{BloomHasher, FnvHasher};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}
