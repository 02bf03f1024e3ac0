//! SHA-256 digest value
//!
//! A [`Digest`] is the 32-byte output of the hash: the eight final state
//! words serialized big-endian, in state order. Its textual form is the
//! 64-character lowercase hex fingerprint.

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

use crate::error::Error;
use crate::hex;

/// Fixed-size 256-bit SHA-256 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 2 * Self::LEN;

    /// Serializes the final hash state into a digest.
    ///
    /// Each word is written big-endian; words keep their state order.
    pub fn from_state(state: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }

    /// Parses a 64-character hex fingerprint.
    pub fn from_hex(text: &str) -> Result<Self, Error> {
        hex::decode_array::<32>(text).map(Digest)
    }

    /// Borrows the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the raw digest bytes.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the first `len` hex characters of the fingerprint.
    ///
    /// `len` is clamped to [`Digest::HEX_LEN`].
    pub fn short_hex(&self, len: usize) -> String {
        let mut out = self.to_hex();
        out.truncate(len.min(Self::HEX_LEN));
        out
    }
}

impl From<[u8; 32]> for Digest {
    fn from(value: [u8; 32]) -> Self {
        Digest(value)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    /// Formats the digest as its lowercase hex fingerprint.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
