//! CRC-32 checksum used to fingerprint resource identifiers.
//!
//! The digests in real corpora were produced by the ISO-HDLC variant
//! (reflected polynomial 0xEDB88320, init and final XOR 0xFFFFFFFF). Any other
//! variant turns every record into a mismatch.

use crc32fast::Hasher;

/// A deterministic byte sequence → `u32` checksum.
///
/// The verifier is generic over this so tests can substitute a trivial function.
pub trait ChecksumFunction {
    fn checksum(&self, data: &[u8]) -> u32;
}

/// Standard CRC-32 (ISO-HDLC), backed by `crc32fast`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Crc32;

impl ChecksumFunction for Crc32 {
    fn checksum(&self, data: &[u8]) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}

/// CRC-32 of a string's bytes. Convenience for generators and tests.
pub fn crc32_str(s: &str) -> u32 {
    Crc32.checksum(s.as_bytes())
}
