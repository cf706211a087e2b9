//! Packed fixed-length bit storage for truth tables.
//!
//! This module provides a simple, cache-efficient bit set of a fixed logical
//! length, used as the backing store of [`BooleanFunction`][crate::function::BooleanFunction].
//!
//! Bits beyond the logical length (the tail of the last word) are always kept
//! zero, so word-level equality, ordering, popcount and XOR are exact.

use std::cmp::Ordering;

/// A fixed-length bit set backed by a vector of u64 words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Logical length in bits
    len: usize,
}

impl BitSet {
    /// Number of bits per word.
    pub const BITS_PER_WORD: usize = 64;

    /// Creates a new bit set of the given length with all bits cleared.
    pub fn new(len: usize) -> Self {
        let num_words = len.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            len,
        }
    }

    /// Creates a bit set from raw words.
    ///
    /// Bits of the last word beyond `len` are cleared.
    ///
    /// # Panics
    ///
    /// Panics if `words` does not hold exactly `ceil(len / 64)` words.
    pub fn from_words(len: usize, mut words: Vec<u64>) -> Self {
        assert_eq!(
            words.len(),
            len.div_ceil(Self::BITS_PER_WORD),
            "Expected {} words for {} bits, got {}",
            len.div_ceil(Self::BITS_PER_WORD),
            len,
            words.len()
        );
        if let Some(last) = words.last_mut() {
            *last &= Self::tail_mask(len);
        }
        Self { words, len }
    }

    /// Mask of the valid bits in the last word.
    #[inline]
    fn tail_mask(len: usize) -> u64 {
        match len % Self::BITS_PER_WORD {
            0 => u64::MAX,
            r => (1u64 << r) - 1,
        }
    }

    /// Returns the logical length in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the underlying words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Returns the bit at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len, "Bit index {} out of range 0..{}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 != 0
    }

    /// Sets the bit at the given index to `value`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len, "Bit index {} out of range 0..{}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        if value {
            self.words[word_idx] |= mask;
        } else {
            self.words[word_idx] &= !mask;
        }
    }

    /// Sets all bits to `value`.
    pub fn fill(&mut self, value: bool) {
        let fill = if value { u64::MAX } else { 0 };
        for word in &mut self.words {
            *word = fill;
        }
        if let Some(last) = self.words.last_mut() {
            *last &= Self::tail_mask(self.len);
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// Returns the number of positions where the two bit sets differ.
    pub fn count_diff(&self, other: &BitSet) -> u64 {
        debug_assert_eq!(self.len, other.len);
        self.words
            .iter()
            .zip(&other.words)
            .map(|(a, b)| (a ^ b).count_ones() as u64)
            .sum()
    }

    /// XORs `other` into `self` word by word.
    pub fn xor_assign(&mut self, other: &BitSet) {
        debug_assert_eq!(self.len, other.len);
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= *b;
        }
    }

    /// Returns an iterator over all set bit indices.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Compares two bit sets of equal length index by index, `false < true`
    /// at the first differing index.
    pub fn cmp_lex(&self, other: &BitSet) -> Ordering {
        debug_assert_eq!(self.len, other.len);
        for (a, b) in self.words.iter().zip(&other.words) {
            let diff = a ^ b;
            if diff != 0 {
                let bit = diff.trailing_zeros();
                return ((a >> bit) & 1).cmp(&((b >> bit) & 1));
            }
        }
        Ordering::Equal
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_new_is_clear() {
        let bs = BitSet::new(100);
        assert_eq!(bs.len(), 100);
        assert_eq!(bs.words().len(), 2);
        assert_eq!(bs.count_ones(), 0);
        assert!((0..100).all(|i| !bs.get(i)));
    }

    #[test]
    fn test_single_bit() {
        let bs = BitSet::new(1);
        assert_eq!(bs.len(), 1);
        assert_eq!(bs.words().len(), 1);
        assert!(!bs.get(0));
    }

    #[test]
    #[should_panic(expected = "Expected 2 words for 100 bits, got 1")]
    fn test_from_words_wrong_count() {
        BitSet::from_words(100, vec![0]);
    }

    #[test]
    fn test_set_get() {
        let mut bs = BitSet::new(100);
        bs.set(42, true);
        assert!(bs.get(42));
        assert_eq!(bs.count_ones(), 1);
        bs.set(42, true);
        assert_eq!(bs.count_ones(), 1);
        bs.set(42, false);
        assert!(!bs.get(42));
        assert_eq!(bs.count_ones(), 0);
    }

    #[test]
    fn test_fill_keeps_tail_clear() {
        let mut bs = BitSet::new(8);
        bs.fill(true);
        assert_eq!(bs.count_ones(), 8);
        assert_eq!(bs.words(), &[0xFF]);
        bs.fill(false);
        assert_eq!(bs.count_ones(), 0);

        let mut bs = BitSet::new(128);
        bs.fill(true);
        assert_eq!(bs.words(), &[u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_from_words_masks_tail() {
        let bs = BitSet::from_words(4, vec![0xFF]);
        assert_eq!(bs.words(), &[0x0F]);
        assert_eq!(bs.count_ones(), 4);
    }

    #[test]
    fn test_xor_and_diff() {
        let mut a = BitSet::new(70);
        let mut b = BitSet::new(70);
        a.set(1, true);
        a.set(65, true);
        b.set(1, true);
        b.set(3, true);
        assert_eq!(a.count_diff(&b), 2);
        a.xor_assign(&b);
        let ones: Vec<_> = a.iter().collect();
        assert_eq!(ones, vec![3, 65]);
    }

    #[test]
    fn test_iter() {
        let mut bs = BitSet::new(100);
        bs.set(5, true);
        bs.set(10, true);
        bs.set(3, true);
        bs.set(64, true); // Second word
        bs.set(65, true);

        let indices: Vec<_> = bs.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65]);
    }

    #[test]
    fn test_cmp_lex() {
        let mut a = BitSet::new(8);
        let mut b = BitSet::new(8);
        assert_eq!(a.cmp_lex(&b), Ordering::Equal);

        // Lowest index decides, regardless of higher bits.
        a.set(0, true);
        b.set(1, true);
        b.set(7, true);
        assert_eq!(a.cmp_lex(&b), Ordering::Greater);
        assert_eq!(b.cmp_lex(&a), Ordering::Less);
    }
}
