//! Bit vector in a plain packed format.
pub mod iter;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::Footprint;
use iter::Iter;

/// The number of bits in a machine word.
pub const WORD_LEN: usize = std::mem::size_of::<u64>() * 8;

/// Bit vector in a plain packed format, storing [`WORD_LEN`] bits per word.
///
/// The vector only grows through [`BitVector::push_bit`]; once built, bits are
/// read back only through [`BitVector::iter`].
///
/// # Examples
///
/// ```
/// use bvmem::BitVector;
///
/// let mut bv = BitVector::new();
/// bv.push_bit(true);
/// bv.push_bit(false);
///
/// assert_eq!(bv.len(), 2);
/// assert_eq!(bv.iter().collect::<Vec<_>>(), vec![true, false]);
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl BitVector {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bvmem::BitVector;
    ///
    /// let bv = BitVector::new();
    /// assert_eq!(bv.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new vector in which at least `capa` bits are reserved.
    ///
    /// Exactly as many words as needed for `capa` bits are reserved,
    /// so pushing up to `capa` bits never reallocates.
    ///
    /// # Arguments
    ///
    ///  - `capa`: Number of bits reserved at least.
    ///
    /// # Errors
    ///
    /// An error is returned if the allocator cannot provide the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use bvmem::BitVector;
    ///
    /// let bv = BitVector::try_with_capacity(40)?;
    /// assert_eq!(bv.len(), 0);
    /// assert_eq!(bv.capacity(), 64);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_with_capacity(capa: usize) -> Result<Self> {
        let num_words = Self::words_for(capa);
        let mut words = Vec::new();
        words.try_reserve_exact(num_words).map_err(|e| {
            anyhow!("failed to reserve {num_words} words for a bit vector of {capa} bits: {e}")
        })?;
        debug!(capa, num_words, "reserved bit vector storage");
        Ok(Self { words, len: 0 })
    }

    /// Creates a new vector from input bit stream `bits`.
    ///
    /// # Arguments
    ///
    ///  - `bits`: Bit stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use bvmem::BitVector;
    ///
    /// let bv = BitVector::from_bits([false, true, false]);
    /// assert_eq!(bv.len(), 3);
    /// ```
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut this = Self::new();
        bits.into_iter().for_each(|b| this.push_bit(b));
        this
    }

    /// Pushes `bit` at the end.
    ///
    /// # Arguments
    ///
    ///  - `bit`: Bit value pushed.
    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) {
        let pos_in_word = self.len % WORD_LEN;
        if pos_in_word == 0 {
            self.words.push(bit as u64);
        } else {
            let last = self.words.len() - 1;
            self.words[last] |= (bit as u64) << pos_in_word;
        }
        self.len += 1;
    }

    /// Creates an iterator for enumerating bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use bvmem::BitVector;
    ///
    /// let bv = BitVector::from_bits([false, true, false]);
    /// let mut it = bv.iter();
    /// assert_eq!(it.next(), Some(false));
    /// assert_eq!(it.next(), Some(true));
    /// assert_eq!(it.next(), Some(false));
    /// assert_eq!(it.next(), None);
    /// ```
    pub const fn iter(&self) -> Iter {
        Iter::new(self)
    }

    /// Gets the number of bits.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the vector is empty.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of bits it can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.words.capacity() * WORD_LEN
    }

    /// Gets the number of words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    fn get_bit(&self, pos: usize) -> Option<bool> {
        if pos < self.len {
            let (block, shift) = (pos / WORD_LEN, pos % WORD_LEN);
            Some((self.words[block] >> shift) & 1 == 1)
        } else {
            None
        }
    }

    #[inline(always)]
    const fn words_for(n: usize) -> usize {
        n.div_ceil(WORD_LEN)
    }
}

impl Footprint for BitVector {
    fn size_in_bytes(&self) -> usize {
        self.words.size_in_bytes()
    }
}

impl Extend<bool> for BitVector {
    fn extend<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        bits.into_iter().for_each(|b| self.push_bit(b));
    }
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("num_words", &self.num_words())
            .field("capacity", &self.capacity())
            .finish()
    }
}
