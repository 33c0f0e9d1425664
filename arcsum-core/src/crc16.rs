//! CRC-16/ARC streaming checksum.
//!
//! This is the CRC-16 variant used by LZH/LHA archives and many serial
//! protocols:
//!
//! - Polynomial: 0x8005 (reflected: 0xA001)
//! - Initial value: 0x0000
//! - Final XOR: 0x0000
//! - Reflected input: Yes
//! - Reflected output: Yes
//!
//! The accumulator tracks a full 32-bit working register even though only
//! the low 16 bits can ever be nonzero; the digest encodes all four register
//! bytes big-endian, so digests are always exactly 4 bytes with the two high
//! bytes zero.

use crate::error::{ChecksumError, Result};
use crate::hasher::StreamingHasher;

/// Reflected CRC-16/ARC polynomial.
const CRC_POLY: u32 = 0xA001;

/// CRC-16/ARC lookup table (polynomial 0xA001, reflected).
///
/// Entries are 32 bits wide to match the working register; the high 16 bits
/// of every entry are zero.
const CRC16_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC_POLY;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// CRC-16/ARC calculator.
///
/// Holds a 32-bit working register and updates it one byte at a time via
/// table lookup. Data may be fed in any chunking; the result depends only on
/// the concatenated byte sequence.
///
/// # Example
///
/// ```
/// use arcsum_core::crc16::Crc16;
///
/// let mut crc = Crc16::new();
/// crc.update(b"123456789");
/// assert_eq!(crc.value(), 0xBB3D);
/// assert_eq!(crc.finish(), [0x00, 0x00, 0xBB, 0x3D]);
/// ```
#[derive(Debug, Clone)]
pub struct Crc16 {
    crc: u32,
}

impl Crc16 {
    /// Create a new CRC-16 calculator.
    pub fn new() -> Self {
        Self { crc: 0 }
    }

    /// Reset the working register to its initial state.
    ///
    /// May be called at any time, including mid-stream, to discard prior
    /// progress.
    pub fn reset(&mut self) {
        self.crc = 0;
    }

    /// Update the CRC with more data.
    ///
    /// An empty slice is a no-op. Any byte value is valid input.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let index = ((self.crc ^ byte as u32) & 0xFF) as usize;
            self.crc = CRC16_TABLE[index] ^ (self.crc >> 8);
        }
    }

    /// Update the CRC with `len` bytes of `buf` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ChecksumError::RangeOutOfBounds`] if `offset + len` exceeds
    /// the buffer length.
    pub fn update_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<()> {
        let end = offset
            .checked_add(len)
            .ok_or_else(|| ChecksumError::range_out_of_bounds(offset, len, buf.len()))?;
        if end > buf.len() {
            return Err(ChecksumError::range_out_of_bounds(offset, len, buf.len()));
        }
        self.update(&buf[offset..end]);
        Ok(())
    }

    /// Get the current working-register value (low 16 bits hold the CRC).
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.crc
    }

    /// Encode the current working register as a 4-byte big-endian digest.
    ///
    /// Pure read: does not reset the register, so calling it twice without
    /// an intervening update returns the same digest.
    #[inline(always)]
    pub fn finish(&self) -> [u8; 4] {
        self.crc.to_be_bytes()
    }

    /// Compute the 4-byte digest for a slice in one call.
    #[inline]
    pub fn compute(data: &[u8]) -> [u8; 4] {
        let mut crc = Self::new();
        crc.update(data);
        crc.finish()
    }

    /// Compute the numeric CRC for a slice in one call.
    #[inline]
    pub fn checksum(data: &[u8]) -> u32 {
        let mut crc = Self::new();
        crc.update(data);
        crc.value()
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHasher for Crc16 {
    type Digest = [u8; 4];

    const DIGEST_LEN: usize = 4;

    fn reset(&mut self) {
        Crc16::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        Crc16::update(self, data);
    }

    fn finish(&self) -> [u8; 4] {
        Crc16::finish(self)
    }
}
