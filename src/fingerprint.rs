//! Text fingerprinting entry points
//!
//! Turns text or raw bytes into a SHA-256 fingerprint. Text is taken as
//! UTF-8 bytes; input that is not well-formed UTF-8 is rejected before
//! any hashing happens.

use tracing::{debug, trace};

use crate::digest::Digest;
use crate::error::Result;
use crate::hash::sha256;

/// Returns the 64-character lowercase hex SHA-256 fingerprint of `text`.
///
/// # Errors
/// [`Error::InvalidEncoding`](crate::Error::InvalidEncoding) if `text` is
/// not well-formed UTF-8. No partial digest is produced.
pub fn digest_hex(text: impl AsRef<[u8]>) -> Result<String> {
    let bytes = text.as_ref();

    if let Err(err) = std::str::from_utf8(bytes) {
        debug!(
            len = bytes.len(),
            valid_up_to = err.valid_up_to(),
            "rejecting malformed text"
        );
        return Err(err.into());
    }

    Ok(digest_bytes(bytes).to_hex())
}

/// Fingerprints text that is already known to be valid UTF-8.
pub fn digest_str(text: &str) -> String {
    digest_bytes(text.as_bytes()).to_hex()
}

/// Hashes raw bytes without interpreting them as text.
pub fn digest_bytes(bytes: &[u8]) -> Digest {
    trace!(len = bytes.len(), "hashing");
    sha256(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn str_and_bytes_agree() {
        assert_eq!(digest_str("abc"), digest_hex(b"abc").unwrap());
        assert_eq!(digest_str("abc"), digest_bytes(b"abc").to_hex());
    }

    #[test]
    fn truncated_multibyte_sequence_is_rejected() {
        // "é" is 0xC3 0xA9; drop the continuation byte.
        let err = digest_hex([b'a', 0xC3]).unwrap_err();

        assert_eq!(err, Error::InvalidEncoding { valid_up_to: 1 });
    }
}
