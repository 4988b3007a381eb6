//! # `bvmem`: Memory footprint of a random bit vector
//!
//! `bvmem` builds a bit vector of [`NUM_BITS`] random bits, measures how many bytes
//! its storage occupies, and reports the result in bytes, kilobytes, and megabytes.
//!
//! ## Components
//!
//! - [`BitVector`]
//!   - Bit vector in a plain packed format, 64 bits per word.
//! - [`Footprint`]
//!   - Interface for measuring the in-memory size of a representation.
//! - [`generate`] and [`generate_with_seed`]
//!   - Random bit vector generation with unbiased draws.
//! - [`MemoryReport`]
//!   - Unit conversion and the four-line text report.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bvmem::{Footprint, MemoryReport, NUM_BITS};
//!
//! let bv = bvmem::generate_with_seed(42)?;
//! let report = MemoryReport::new(NUM_BITS, bv.size_in_bytes());
//!
//! let mut out = vec![];
//! report.write_to(&mut out)?;
//! assert!(String::from_utf8(out)?.starts_with("Bit vector size: 1048576 bits\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Limitation
//!
//! This library is designed to run on 64-bit machines.
#![deny(missing_docs)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("`target_pointer_width` must be 64");

pub mod bit_vector;
pub mod footprint;
pub mod generator;
pub mod report;
pub mod units;

pub use bit_vector::BitVector;
pub use footprint::Footprint;
pub use generator::{generate, generate_with_seed, NUM_BITS};
pub use report::MemoryReport;
