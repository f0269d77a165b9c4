//! Byte-wise population counting over a precomputed 256-entry table.

/// Set-bit counts for every possible byte value.
const BITS_SET: [u8; 256] = bits_set_table();

const fn bits_set_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = table[i / 2] + (i & 1) as u8;
        i += 1;
    }
    table
}

/// Counts the set bits in a single word.
///
/// Sums table lookups over the four bytes of the word, extracted by shifting
/// and masking rather than reinterpreting memory, so the result does not
/// depend on platform endianness.
///
/// # Examples
/// ```
/// use packed_bitmap::count_word;
///
/// assert_eq!(count_word(0), 0);
/// assert_eq!(count_word(0b1011), 3);
/// assert_eq!(count_word(!0), 32);
/// ```
#[inline]
pub fn count_word(word: u32) -> usize {
    BITS_SET[(word & 0xFF) as usize] as usize
        + BITS_SET[(word >> 8 & 0xFF) as usize] as usize
        + BITS_SET[(word >> 16 & 0xFF) as usize] as usize
        + BITS_SET[(word >> 24) as usize] as usize
}
