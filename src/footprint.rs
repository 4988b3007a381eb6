//! Utilities for measuring the in-memory size of data structures.

/// Trait to measure how many bytes a data structure occupies in memory.
///
/// [`Footprint::size_in_bytes`] counts the storage owned by the value
/// (typically heap memory), while [`Footprint::handle_bytes`] counts the
/// fixed-size handle itself.
///
/// # Examples
///
/// ```
/// use bvmem::{BitVector, Footprint};
///
/// let packed = BitVector::from_bits([true; 100]);
/// let plain = vec![true; 100];
///
/// assert_eq!(packed.size_in_bytes(), 16);
/// assert_eq!(plain.size_in_bytes(), 100);
/// ```
pub trait Footprint {
    /// Returns the number of bytes of storage owned by the data structure.
    fn size_in_bytes(&self) -> usize;

    /// Returns the number of bytes of the fixed-size handle.
    fn handle_bytes(&self) -> usize
    where
        Self: Sized,
    {
        std::mem::size_of::<Self>()
    }

    /// Returns [`Footprint::size_in_bytes`] plus [`Footprint::handle_bytes`].
    fn total_bytes(&self) -> usize
    where
        Self: Sized,
    {
        self.size_in_bytes() + self.handle_bytes()
    }
}

/// A vector owns `capacity() * size_of::<T>()` bytes, whether or not they are in use.
impl<T> Footprint for Vec<T> {
    fn size_in_bytes(&self) -> usize {
        self.capacity() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::BitVector;

    #[test]
    fn test_vec_counts_capacity() {
        let mut v: Vec<u64> = Vec::with_capacity(10);
        v.push(1);
        assert_eq!(v.size_in_bytes(), 80);
    }

    #[test]
    fn test_handle_bytes() {
        let v: Vec<bool> = vec![];
        assert_eq!(v.size_in_bytes(), 0);
        assert_eq!(v.handle_bytes(), 24);
        assert_eq!(v.total_bytes(), 24);

        let bv = BitVector::new();
        assert_eq!(bv.handle_bytes(), 32);
    }

    #[test]
    fn test_packed_is_eight_times_smaller() {
        let len = 1 << 20;
        let plain = vec![false; len];
        let mut packed = BitVector::try_with_capacity(len).unwrap();
        packed.extend(plain.iter().cloned());
        assert_eq!(plain.size_in_bytes(), 1_048_576);
        assert_eq!(packed.size_in_bytes(), 131_072);
        assert_eq!(plain.size_in_bytes(), packed.size_in_bytes() * 8);
    }
}
