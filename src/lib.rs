//! A packed, resizable bitmap backed by 32-bit words.
//!
//! [`BitMap`] is the main struct in this library. It stores a logical number
//! of bits in a dense `u32` word sequence on the heap and supports per-bit
//! access, whole-set boolean algebra, population counting, resizing,
//! sub-range extraction and OR-folding compaction.
//!
//! # Examples
//! ```
//! use packed_bitmap::BitMap;
//!
//! let mut bitmap = BitMap::with_size(5, false);
//! bitmap.set(1, true)?;
//! bitmap.set(4, true)?;
//! assert_eq!(bitmap.count(), 2);
//! assert_eq!(bitmap.to_string(), "01001");
//! # Ok::<(), packed_bitmap::BitMapError>(())
//! ```
//!
//! # Features
//!
//! - Runtime-sized: `resize`, `clear` and `push_back` change the bit count
//!   in place
//! - Bitwise ops: `&`, `|`, `^`, `!` plus fallible in-place `bit_and`,
//!   `bit_or`, `bit_xor` that report size mismatches instead of panicking
//! - Population counting through a byte-wise lookup table ([`count_word`])
//! - Sub-range extraction (`get_part`) and OR-folding (`compact`,
//!   `get_compact`)
//! - Iteration: `iter()` (all bits as bools), `iter_ones()` (set-bit
//!   indices)
//! - `Display` renders the bit string in index order
//! - Optional `serde` feature: lossless `{ bit_count, words }` round-trip
//!
//! # Out-of-range access
//!
//! `get` and `set` return a [`BitMapError`] for positions beyond the logical
//! bit count rather than touching padding or panicking, so persisted or
//! computed indices can be checked at the call site.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod bitmap;
mod error;
mod popcount;
#[cfg(feature = "serde")]
mod serde_support;

pub use bitmap::{BitMap, Bits, IterOnes, word_count};
pub use error::BitMapError;
pub use popcount::count_word;
