//! Error types for checksum operations.
//!
//! The CRC algorithm itself is total over all byte sequences; the only
//! failure category is a caller-level precondition violation at the API
//! boundary, such as a byte range that falls outside the supplied buffer.

use thiserror::Error;

/// The error type for checksum operations.
#[derive(Debug, Error)]
pub enum ChecksumError {
    /// Requested byte range falls outside the supplied buffer.
    #[error("Range out of bounds: offset {offset} + len {len} exceeds buffer of {available} bytes")]
    RangeOutOfBounds {
        /// Start offset of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Number of bytes available in the buffer.
        available: usize,
    },
}

/// Result type alias for checksum operations.
pub type Result<T> = std::result::Result<T, ChecksumError>;

impl ChecksumError {
    /// Create a range out of bounds error.
    pub fn range_out_of_bounds(offset: usize, len: usize, available: usize) -> Self {
        Self::RangeOutOfBounds {
            offset,
            len,
            available,
        }
    }
}
