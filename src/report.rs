//! Memory usage report in bytes, kilobytes, and megabytes.
use std::io::Write;

use anyhow::Result;

use crate::units::{BYTES_PER_KB, BYTES_PER_MB};

/// Memory usage of a bit vector of `num_bits` bits occupying `bytes` bytes.
///
/// Its [`Display`](std::fmt::Display) form is the four-line report
///
/// ```text
/// Bit vector size: {num_bits} bits
/// Memory usage: {bytes} bytes
/// Memory usage: {kb:.2} KB
/// Memory usage: {mb:.2} MB
/// ```
///
/// # Examples
///
/// ```
/// use bvmem::MemoryReport;
///
/// let report = MemoryReport::new(1 << 20, 131_072);
/// assert_eq!(report.kb(), 128.0);
/// assert_eq!(report.mb(), 0.125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReport {
    num_bits: usize,
    bytes: usize,
}

impl MemoryReport {
    /// Creates a new report.
    ///
    /// # Arguments
    ///
    ///  - `num_bits`: Number of bits in the vector.
    ///  - `bytes`: Measured footprint in bytes.
    pub const fn new(num_bits: usize, bytes: usize) -> Self {
        Self { num_bits, bytes }
    }

    /// Gets the number of bits.
    pub const fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Gets the footprint in bytes.
    pub const fn bytes(&self) -> usize {
        self.bytes
    }

    /// Gets the footprint in kilobytes.
    pub fn kb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_KB as f64
    }

    /// Gets the footprint in megabytes.
    pub fn mb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB as f64
    }

    /// Writes the four-line report into `writer`, each line terminated by a newline.
    ///
    /// # Errors
    ///
    /// An error is returned if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for MemoryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bit vector size: {} bits", self.num_bits)?;
        writeln!(f, "Memory usage: {} bytes", self.bytes)?;
        writeln!(f, "Memory usage: {:.2} KB", self.kb())?;
        write!(f, "Memory usage: {:.2} MB", self.mb())
    }
}
