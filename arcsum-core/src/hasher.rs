//! The streaming-hash contract.
//!
//! A hasher is driven through three operations: reset to a fresh state, feed
//! bytes in arbitrary chunking, and finish to a fixed-size digest. Finishing
//! is a pure read of the accumulated state, not a state transition, so it
//! may be repeated and does not reset the hasher.

/// A streaming hasher producing a fixed-size digest.
///
/// Implementations must be chunk-boundary invariant: feeding a byte sequence
/// across any number of `update` calls yields the same digest as feeding it
/// in one call.
pub trait StreamingHasher {
    /// The fixed-size digest type.
    type Digest: AsRef<[u8]>;

    /// Digest size in bytes.
    const DIGEST_LEN: usize;

    /// Reset to the fresh state, discarding all bytes fed so far.
    fn reset(&mut self);

    /// Feed more bytes. An empty slice is a no-op.
    fn update(&mut self, data: &[u8]);

    /// Produce the digest over all bytes fed since the last reset.
    ///
    /// Does not reset the hasher; calling `finish` twice without an
    /// intervening `update` or `reset` returns the same digest.
    fn finish(&self) -> Self::Digest;

    /// Hash a complete byte slice in one call (convenience method).
    ///
    /// Resets first, so prior stream state does not leak into the digest.
    fn digest(&mut self, data: &[u8]) -> Self::Digest {
        self.reset();
        self.update(data);
        self.finish()
    }
}
