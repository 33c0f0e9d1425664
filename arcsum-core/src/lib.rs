//! # Arcsum Core
//!
//! Streaming CRC-16/ARC checksum computation.
//!
//! This crate provides:
//!
//! - [`crc16`]: the CRC-16/ARC lookup table and streaming accumulator
//! - [`hasher`]: the generic streaming-hash trait (`reset`/`update`/`finish`)
//! - [`error`]: error types for boundary precondition violations
//!
//! The checksum is the CRC-16/ARC variant (reflected polynomial 0xA001, no
//! initial or final complement) used by LZH/LHA archives. The accumulator
//! carries a 32-bit working register and finishes to a 4-byte big-endian
//! digest; only the low 16 bits of the register are ever nonzero.
//!
//! ## Example
//!
//! ```rust
//! use arcsum_core::{Crc16, StreamingHasher};
//!
//! // One-shot
//! assert_eq!(Crc16::checksum(b"123456789"), 0xBB3D);
//!
//! // Streaming, in arbitrary chunks
//! let mut crc = Crc16::new();
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.finish(), [0x00, 0x00, 0xBB, 0x3D]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod crc16;
pub mod error;
pub mod hasher;

// Re-exports for convenience
pub use crc16::Crc16;
pub use error::{ChecksumError, Result};
pub use hasher::StreamingHasher;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::crc16::Crc16;
    pub use crate::error::{ChecksumError, Result};
    pub use crate::hasher::StreamingHasher;
}
