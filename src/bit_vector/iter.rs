//! Iterator on bit vectors.
use crate::BitVector;

/// Iterator for enumerating bits, created by [`BitVector::iter`].
pub struct Iter<'a> {
    bv: &'a BitVector,
    pos: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    pub const fn new(bv: &'a BitVector) -> Self {
        Self { bv, pos: 0 }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.bv.get_bit(self.pos)?;
        self.pos += 1;
        Some(x)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bv.len() - self.pos;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_shrinks() {
        let bv = BitVector::from_bits([true, true, false]);
        let mut it = bv.iter();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.by_ref().for_each(drop);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }
}
