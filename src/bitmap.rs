use crate::error::BitMapError;
use crate::popcount::count_word;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// Number of bits held by one backing word.
const WORD_BITS: usize = 32;

/// Computes the number of backing words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use packed_bitmap::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(32), 1);
/// assert_eq!(word_count(33), 2);
/// assert_eq!(word_count(70), 3);
/// ```
pub const fn word_count(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS)
}

/// The main type that stores the information.
///
/// A packed, resizable sequence of bits backed by `u32` words. Bit `i` lives
/// in word `i / 32` at position `i % 32`. The logical bit count may be
/// smaller than `32 * word count`; the unused high-order bits of the last
/// word are *padding*.
///
/// Padding is not kept zero at all times. `set_all`, `reverse`, the in-place
/// boolean operations and a shrinking `resize` may leave arbitrary values
/// there. Operations whose result must not depend on padding ([`count`],
/// [`is_any`], [`first_set_bit`], equality, hashing) mask it out, and
/// [`resize`] renormalizes it before exposing former padding as logical bits.
///
/// [`count`]: BitMap::count
/// [`is_any`]: BitMap::is_any
/// [`first_set_bit`]: BitMap::first_set_bit
/// [`resize`]: BitMap::resize
#[derive(Clone)]
pub struct BitMap {
    bit_count: usize,
    words: Vec<u32>,
}

impl BitMap {
    /// Creates an empty bitmap with no bits and no backing words.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::new();
    /// assert_eq!(bm.len(), 0);
    /// assert!(bm.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            bit_count: 0,
            words: Vec::new(),
        }
    }

    /// Creates a bitmap of `bit_count` bits, all set to `value`.
    ///
    /// When `value` is `true` the backing words are filled with all-ones,
    /// padding included.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::with_size(70, true);
    /// assert_eq!(bm.len(), 70);
    /// assert_eq!(bm.count(), 70);
    /// ```
    pub fn with_size(bit_count: usize, value: bool) -> Self {
        let fill = if value { !0u32 } else { 0 };
        Self {
            bit_count,
            words: vec![fill; word_count(bit_count)],
        }
    }

    /// Wraps a word sequence as a bitmap of `bit_count` logical bits.
    ///
    /// This is the deserialization path: the words are taken verbatim,
    /// padding included. Fails with [`BitMapError::WordCountMismatch`] when
    /// `words.len() != word_count(bit_count)`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_words(vec![0b101], 3)?;
    /// assert!(bm.get(0)?);
    /// assert!(!bm.get(1)?);
    /// assert!(bm.get(2)?);
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn from_words(words: Vec<u32>, bit_count: usize) -> Result<Self, BitMapError> {
        if words.len() != word_count(bit_count) {
            return Err(BitMapError::WordCountMismatch {
                words: words.len(),
                bits: bit_count,
            });
        }
        Ok(Self { bit_count, words })
    }

    /// Constructs a bitmap from a boolean slice, where `true` means set.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_slice(&[true, false, true, false]);
    /// assert_eq!(bm.len(), 4);
    /// assert_eq!(bm.count(), 2);
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        let mut bm = Self::with_size(bits.len(), false);
        for (idx, &bit) in bits.iter().enumerate() {
            if bit {
                let (word_idx, bit_idx) = Self::idxs(idx);
                bm.words[word_idx] |= 1u32 << bit_idx;
            }
        }
        bm
    }

    /// Constructs a bitmap of `bit_count` bits with only the given indices set.
    ///
    /// Fails with [`BitMapError::IndexOutOfBounds`] if any index is
    /// `>= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_ones_iter(5, [0, 2, 4])?;
    /// assert!(bm.get(0)?);
    /// assert!(!bm.get(1)?);
    /// assert_eq!(bm.count(), 3);
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(
        bit_count: usize,
        iter: I,
    ) -> Result<Self, BitMapError> {
        let mut bm = Self::with_size(bit_count, false);
        for idx in iter {
            bm.set(idx, true)?;
        }
        Ok(bm)
    }

    /// Returns the logical number of bits.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// assert_eq!(BitMap::with_size(70, false).len(), 70);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_count
    }

    /// Returns `true` if the bitmap holds no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    /// Returns the backing words, padding included.
    ///
    /// Together with [`len`] this fully determines the bitmap state; feed
    /// both back into [`from_words`] to reconstruct it.
    ///
    /// [`len`]: BitMap::len
    /// [`from_words`]: BitMap::from_words
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns `true` if the bit at `pos` is set.
    ///
    /// Fails with [`BitMapError::IndexOutOfBounds`] if `pos >= len()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(8, false);
    /// bm.set(3, true)?;
    /// assert!(bm.get(3)?);
    /// assert!(!bm.get(4)?);
    /// assert!(bm.get(8).is_err());
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    #[inline]
    pub fn get(&self, pos: usize) -> Result<bool, BitMapError> {
        if pos >= self.bit_count {
            return Err(BitMapError::IndexOutOfBounds {
                pos,
                len: self.bit_count,
            });
        }
        let (word_idx, bit_idx) = Self::idxs(pos);
        Ok(self.words[word_idx] & 1 << bit_idx != 0)
    }

    /// Sets the bit at `pos` to `value`.
    ///
    /// Fails with [`BitMapError::IndexOutOfBounds`] if `pos >= len()`.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(8, true);
    /// bm.set(3, false)?;
    /// assert!(!bm.get(3)?);
    /// assert_eq!(bm.count(), 7);
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, pos: usize, value: bool) -> Result<(), BitMapError> {
        if pos >= self.bit_count {
            return Err(BitMapError::IndexOutOfBounds {
                pos,
                len: self.bit_count,
            });
        }
        let (word_idx, bit_idx) = Self::idxs(pos);
        if value {
            self.words[word_idx] |= 1u32 << bit_idx;
        } else {
            self.words[word_idx] &= !(1u32 << bit_idx);
        }
        Ok(())
    }

    /// Sets every bit, padding included.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(70, false);
    /// bm.set_all();
    /// assert_eq!(bm.count(), 70);
    /// ```
    pub fn set_all(&mut self) {
        self.words.fill(!0);
    }

    /// Clears every bit, padding included.
    pub fn reset_all(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of set bits among the logical bits.
    ///
    /// Padding never contributes: the last word is masked down to the
    /// logical range before counting. Counting itself goes through the
    /// byte-wise lookup table in [`count_word`].
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(5, false);
    /// bm.set(1, true)?;
    /// bm.set(4, true)?;
    /// assert_eq!(bm.count(), 2);
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    ///
    /// [`count_word`]: crate::count_word
    pub fn count(&self) -> usize {
        (0..self.words.len())
            .map(|i| count_word(self.logical_word(i)))
            .sum()
    }

    /// Returns `true` if any logical bit is set.
    ///
    /// Scans words from the most significant down and short-circuits on the
    /// first nonzero one, with the last word masked to the logical range.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(40, false);
    /// assert!(!bm.is_any());
    /// bm.set(39, true)?;
    /// assert!(bm.is_any());
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn is_any(&self) -> bool {
        (0..self.words.len())
            .rev()
            .any(|i| self.logical_word(i) != 0)
    }

    /// Returns the index of the first set logical bit, or `None` if all
    /// bits are unset.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(40, false);
    /// assert_eq!(bm.first_set_bit(), None);
    /// bm.set(35, true)?;
    /// assert_eq!(bm.first_set_bit(), Some(35));
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn first_set_bit(&self) -> Option<usize> {
        for i in 0..self.words.len() {
            let word = self.logical_word(i);
            if word != 0 {
                return Some(i * WORD_BITS + word.trailing_zeros() as usize);
            }
        }
        None
    }

    /// Flips every bit in place, padding included.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::from_slice(&[true, false, true]);
    /// bm.reverse();
    /// assert_eq!(bm, BitMap::from_slice(&[false, true, false]));
    /// ```
    pub fn reverse(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
    }

    /// Performs an in-place bitwise AND with another bitmap of the same size.
    ///
    /// Fails with [`BitMapError::SizeMismatch`] when the sizes differ,
    /// leaving `self` untouched. Padding is combined unmasked, so the
    /// resulting padding depends on both operands.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut a = BitMap::from_slice(&[true, true, false]);
    /// let b = BitMap::from_slice(&[true, false, false]);
    /// a.bit_and(&b)?;
    /// assert_eq!(a, BitMap::from_slice(&[true, false, false]));
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn bit_and(&mut self, other: &Self) -> Result<(), BitMapError> {
        self.check_same_size(other)?;
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word &= other_word;
        }
        Ok(())
    }

    /// Performs an in-place bitwise OR with another bitmap of the same size.
    ///
    /// Fails with [`BitMapError::SizeMismatch`] when the sizes differ,
    /// leaving `self` untouched.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut a = BitMap::from_slice(&[true, false, false]);
    /// let b = BitMap::from_slice(&[false, true, false]);
    /// a.bit_or(&b)?;
    /// assert_eq!(a, BitMap::from_slice(&[true, true, false]));
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn bit_or(&mut self, other: &Self) -> Result<(), BitMapError> {
        self.check_same_size(other)?;
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
        Ok(())
    }

    /// Performs an in-place bitwise XOR with another bitmap of the same size.
    ///
    /// Fails with [`BitMapError::SizeMismatch`] when the sizes differ,
    /// leaving `self` untouched.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut a = BitMap::from_slice(&[true, true, false]);
    /// let b = a.clone();
    /// a.bit_xor(&b)?;
    /// assert_eq!(a.count(), 0);
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn bit_xor(&mut self, other: &Self) -> Result<(), BitMapError> {
        self.check_same_size(other)?;
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word ^= other_word;
        }
        Ok(())
    }

    /// Resizes the bitmap to `new_bit_count` bits, filling new bits with
    /// `value`.
    ///
    /// The current padding tail is forced to `value` *before* the size
    /// changes, so growing exposes a deterministic fill where padding used
    /// to be. Newly appended words are filled entirely with `value`.
    /// Shrinking truncates the word sequence to the new required length.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(5, false);
    /// bm.resize(70, true);
    /// assert_eq!(bm.len(), 70);
    /// assert_eq!(bm.count(), 65);
    /// bm.resize(3, false);
    /// assert_eq!(bm.len(), 3);
    /// assert_eq!(bm.count(), 0);
    /// ```
    pub fn resize(&mut self, new_bit_count: usize, value: bool) {
        self.set_tail(value);
        self.bit_count = new_bit_count;
        let fill = if value { !0u32 } else { 0 };
        self.words.resize(word_count(new_bit_count), fill);
    }

    /// Empties the bitmap, dropping all bits and backing words.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(10, true);
    /// bm.clear();
    /// assert!(bm.is_empty());
    /// assert!(bm.words().is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.bit_count = 0;
        self.words.clear();
    }

    /// Appends one bit equal to `bit`.
    ///
    /// Grows by exactly one bit through the [`resize`] tail-fill path. This
    /// is O(word count) per call; there is no amortized growth strategy.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::new();
    /// bm.push_back(true);
    /// bm.push_back(false);
    /// bm.push_back(true);
    /// assert_eq!(bm, BitMap::from_slice(&[true, false, true]));
    /// ```
    ///
    /// [`resize`]: BitMap::resize
    pub fn push_back(&mut self, bit: bool) {
        self.resize(self.bit_count + 1, bit);
    }

    /// Extracts logical bits `[begin, end)` into a new bitmap, reindexed
    /// from 0.
    ///
    /// Returns an empty bitmap when `begin >= end` and fails with
    /// [`BitMapError::IndexOutOfBounds`] when `end > len()`.
    ///
    /// Each output word is assembled from up to two source words: the word
    /// at the shifted offset moved right by `begin % 32`, merged with the
    /// next word moved left by the remaining bits. The merge is skipped when
    /// `begin` is word-aligned (a left shift by 32 would be invalid) and
    /// when no next word exists.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::with_size(40, false);
    /// for pos in 30..35 {
    ///     bm.set(pos, true)?;
    /// }
    /// let part = bm.get_part(28, 36)?;
    /// assert_eq!(part.len(), 8);
    /// assert_eq!(part.to_string(), "00111110");
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn get_part(&self, begin: usize, end: usize) -> Result<Self, BitMapError> {
        if begin >= end {
            return Ok(Self::new());
        }
        if end > self.bit_count {
            return Err(BitMapError::IndexOutOfBounds {
                pos: end,
                len: self.bit_count,
            });
        }
        let new_bit_count = end - begin;
        let (vector_shift, block_shift) = Self::idxs(begin);
        let mut new_words = vec![0u32; word_count(new_bit_count)];
        for (i, word) in new_words.iter_mut().enumerate() {
            *word = self.words[i + vector_shift] >> block_shift;
            if block_shift != 0 && i + vector_shift + 1 < self.words.len() {
                *word |= self.words[i + vector_shift + 1] << (WORD_BITS - block_shift);
            }
        }
        Ok(Self {
            bit_count: new_bit_count,
            words: new_words,
        })
    }

    /// Folds the bitmap into `new_size` bits by OR-ing consecutive
    /// `new_size`-bit chunks, returning the result as a new bitmap.
    ///
    /// The last chunk may be shorter; its missing high bits count as unset.
    /// A `new_size` equal to the current length yields an equivalent copy.
    /// Fails with [`BitMapError::InvalidChunkSize`] when `new_size` is zero
    /// or exceeds the current length.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_slice(&[
    ///     true, false, false, true,
    ///     false, true, false, false,
    ///     true, true,
    /// ]);
    /// let folded = bm.get_compact(4)?;
    /// assert_eq!(folded, BitMap::from_slice(&[true, true, false, true]));
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    pub fn get_compact(&self, new_size: usize) -> Result<Self, BitMapError> {
        if new_size == 0 || new_size > self.bit_count {
            return Err(BitMapError::InvalidChunkSize {
                chunk: new_size,
                len: self.bit_count,
            });
        }
        if new_size == self.bit_count {
            return Ok(self.clone());
        }
        let mut result = self.get_part(0, new_size)?;
        let mut begin = new_size;
        while begin < self.bit_count {
            let end = (begin + new_size).min(self.bit_count);
            let mut chunk = self.get_part(begin, end)?;
            if chunk.len() < new_size {
                chunk.resize(new_size, false);
            }
            result.bit_or(&chunk)?;
            begin += new_size;
        }
        Ok(result)
    }

    /// Folds the bitmap into `new_size` bits in place.
    ///
    /// Same semantics as [`get_compact`]; on error the bitmap is left
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let mut bm = BitMap::from_slice(&[true, false, false, true, false, true]);
    /// bm.compact(3)?;
    /// assert_eq!(bm, BitMap::from_slice(&[true, false, true]));
    /// # Ok::<(), packed_bitmap::BitMapError>(())
    /// ```
    ///
    /// [`get_compact`]: BitMap::get_compact
    pub fn compact(&mut self, new_size: usize) -> Result<(), BitMapError> {
        *self = self.get_compact(new_size)?;
        Ok(())
    }

    /// Returns an iterator over all logical bits as `bool`, from index 0 up.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_slice(&[true, false, true]);
    /// let bits: Vec<bool> = bm.iter().collect();
    /// assert_eq!(bits, [true, false, true]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Bits<'_> {
        Bits { map: self, pos: 0 }
    }

    /// Returns an iterator over the indices of all set logical bits, in
    /// ascending order.
    ///
    /// # Examples
    /// ```
    /// use packed_bitmap::BitMap;
    ///
    /// let bm = BitMap::from_slice(&[true, false, true, false, true]);
    /// let ones: Vec<usize> = bm.iter_ones().collect();
    /// assert_eq!(ones, [0, 2, 4]);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes {
            map: self,
            word_idx: 0,
            current: if self.words.is_empty() {
                0
            } else {
                self.logical_word(0)
            },
            base_bit_idx: 0,
        }
    }

    #[inline]
    const fn idxs(pos: usize) -> (usize, usize) {
        (pos / WORD_BITS, pos % WORD_BITS)
    }

    fn check_same_size(&self, other: &Self) -> Result<(), BitMapError> {
        if self.bit_count != other.bit_count {
            return Err(BitMapError::SizeMismatch {
                left: self.bit_count,
                right: other.bit_count,
            });
        }
        Ok(())
    }

    // Word at `idx` with padding cleared when it is the last word.
    #[inline]
    fn logical_word(&self, idx: usize) -> u32 {
        let word = self.words[idx];
        let rem = self.bit_count % WORD_BITS;
        if rem != 0 && idx + 1 == self.words.len() {
            word & ((1u32 << rem) - 1)
        } else {
            word
        }
    }

    // Forces the padding tail of the current last word to `value`.
    fn set_tail(&mut self, value: bool) {
        let rem = self.bit_count % WORD_BITS;
        if rem == 0 {
            return;
        }
        let mask = (1u32 << rem) - 1;
        if let Some(last) = self.words.last_mut() {
            *last = if value { *last | !mask } else { *last & mask };
        }
    }
}

impl Default for BitMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BitMap {
    fn eq(&self, other: &Self) -> bool {
        self.bit_count == other.bit_count
            && (0..self.words.len()).all(|i| self.logical_word(i) == other.logical_word(i))
    }
}

impl Eq for BitMap {}

impl Hash for BitMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bit_count.hash(state);
        for i in 0..self.words.len() {
            self.logical_word(i).hash(state);
        }
    }
}

impl<'bitmap> IntoIterator for &'bitmap BitMap {
    type Item = bool;
    type IntoIter = Bits<'bitmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for BitMap {
    /// Renders the bit string in index order, one `'0'`/`'1'` per logical
    /// bit, index 0 first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for BitMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitMap[{}] LSB -> ", self.bit_count)?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % 8 == 7 && i + 1 < self.bit_count {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

impl BitAnd for &BitMap {
    type Output = BitMap;

    /// # Panics
    /// Panics if the operands differ in size.
    fn bitand(self, rhs: Self) -> BitMap {
        let mut result = BitMap::clone(self);
        result &= rhs;
        result
    }
}

impl BitAndAssign<&BitMap> for BitMap {
    /// # Panics
    /// Panics if the operands differ in size.
    fn bitand_assign(&mut self, rhs: &BitMap) {
        if let Err(e) = self.bit_and(rhs) {
            panic!("{e}");
        }
    }
}

impl BitOr for &BitMap {
    type Output = BitMap;

    /// # Panics
    /// Panics if the operands differ in size.
    fn bitor(self, rhs: Self) -> BitMap {
        let mut result = BitMap::clone(self);
        result |= rhs;
        result
    }
}

impl BitOrAssign<&BitMap> for BitMap {
    /// # Panics
    /// Panics if the operands differ in size.
    fn bitor_assign(&mut self, rhs: &BitMap) {
        if let Err(e) = self.bit_or(rhs) {
            panic!("{e}");
        }
    }
}

impl BitXor for &BitMap {
    type Output = BitMap;

    /// # Panics
    /// Panics if the operands differ in size.
    fn bitxor(self, rhs: Self) -> BitMap {
        let mut result = BitMap::clone(self);
        result ^= rhs;
        result
    }
}

impl BitXorAssign<&BitMap> for BitMap {
    /// # Panics
    /// Panics if the operands differ in size.
    fn bitxor_assign(&mut self, rhs: &BitMap) {
        if let Err(e) = self.bit_xor(rhs) {
            panic!("{e}");
        }
    }
}

impl Not for &BitMap {
    type Output = BitMap;

    fn not(self) -> BitMap {
        let mut result = BitMap::clone(self);
        result.reverse();
        result
    }
}

/// Iterator over all logical bits as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from
/// index 0.
///
/// Returned by [`BitMap::iter()`].
#[derive(Clone, Copy)]
pub struct Bits<'bitmap> {
    map: &'bitmap BitMap,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.map.bit_count {
            return None;
        }
        let (word_idx, bit_idx) = BitMap::idxs(self.pos);
        self.pos += 1;
        Some(self.map.words[word_idx] & 1 << bit_idx != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.bit_count - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

/// Iterator over the indices of set logical bits.
///
/// Yields the positions of all set bits in ascending order; padding bits
/// are never reported.
///
/// Returned by [`BitMap::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitmap> {
    map: &'bitmap BitMap,
    word_idx: usize,
    current: u32,
    base_bit_idx: usize,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.map.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = if self.word_idx < self.map.words.len() {
                self.map.logical_word(self.word_idx)
            } else {
                0
            };
        }
        None
    }
}

impl FusedIterator for IterOnes<'_> {}
