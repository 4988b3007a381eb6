//! Random bit vector generation.
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::debug;

use crate::BitVector;

/// The number of bits in a generated vector, i.e., $`2^{20}`$.
pub const NUM_BITS: usize = 1 << 20;

/// Generates a vector of [`NUM_BITS`] random bits, seeded from system entropy.
///
/// # Errors
///
/// An error is returned if the storage for the bits cannot be allocated.
pub fn generate() -> Result<BitVector> {
    debug!("seeding generator from entropy");
    gen_random_bits(NUM_BITS, ChaChaRng::from_entropy())
}

/// Generates a vector of [`NUM_BITS`] random bits from a fixed `seed`.
///
/// The same seed always produces the same vector.
///
/// # Errors
///
/// An error is returned if the storage for the bits cannot be allocated.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bv = bvmem::generate_with_seed(113)?;
/// assert_eq!(bv.len(), bvmem::NUM_BITS);
/// assert_eq!(bv, bvmem::generate_with_seed(113)?);
/// # Ok(())
/// # }
/// ```
pub fn generate_with_seed(seed: u64) -> Result<BitVector> {
    debug!(seed, "seeding generator");
    gen_random_bits(NUM_BITS, ChaChaRng::seed_from_u64(seed))
}

fn gen_random_bits<R: Rng>(len: usize, mut rng: R) -> Result<BitVector> {
    let mut bv = BitVector::try_with_capacity(len)?;
    bv.extend((0..len).map(|_| rng.gen_bool(0.5)));
    debug!(len = bv.len(), num_words = bv.num_words(), "generated random bits");
    Ok(bv)
}
