//! Byte unit constants.

/// Bytes in a kilobyte.
pub const BYTES_PER_KB: u64 = 1024;

/// Bytes in a megabyte.
pub const BYTES_PER_MB: u64 = 1024 * BYTES_PER_KB;
