use thiserror::Error;

/// Errors reported by fallible [`BitMap`] operations.
///
/// Every fallible operation checks its arguments before touching the bitmap,
/// so an `Err` always leaves the bitmap in its prior state.
///
/// [`BitMap`]: crate::BitMap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitMapError {
    /// A bit position at or beyond the logical bit count.
    #[error("bit index {pos} out of bounds for a bitmap of {len} bits")]
    IndexOutOfBounds {
        /// The offending bit position.
        pos: usize,
        /// The logical bit count of the bitmap.
        len: usize,
    },

    /// A binary boolean operation between bitmaps of different sizes.
    #[error("bitmap size mismatch: {left} bits vs {right} bits")]
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },

    /// A compaction chunk size of zero or larger than the bitmap.
    #[error("invalid compaction chunk size {chunk} for a bitmap of {len} bits")]
    InvalidChunkSize {
        /// The requested chunk size.
        chunk: usize,
        /// The logical bit count of the bitmap.
        len: usize,
    },

    /// A word sequence whose length cannot back the declared bit count.
    #[error("{words} backing words cannot hold exactly {bits} bits")]
    WordCountMismatch {
        /// Number of words supplied.
        words: usize,
        /// Declared logical bit count.
        bits: usize,
    },
}
