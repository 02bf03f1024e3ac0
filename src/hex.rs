//! Lowercase hexadecimal encoding
//!
//! Each byte maps to two characters from `0-9a-f`, high nibble first,
//! in input order. Decoding accepts either case.

use crate::error::{Error, Result};

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Encodes `bytes` as a lowercase hex string of length `2 * bytes.len()`.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);

    for &byte in bytes {
        out.push(ALPHABET[(byte >> 4) as usize] as char);
        out.push(ALPHABET[(byte & 0x0f) as usize] as char);
    }

    out
}

/// Decodes a hex string back into bytes.
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let text = text.as_ref();

    if text.len() % 2 != 0 {
        return Err(Error::InvalidHex {
            reason: format!("odd number of digits ({})", text.len()),
        });
    }

    let mut out = Vec::with_capacity(text.len() / 2);
    for (i, pair) in text.chunks_exact(2).enumerate() {
        let high = nibble(pair[0], 2 * i)?;
        let low = nibble(pair[1], 2 * i + 1)?;
        out.push((high << 4) | low);
    }

    Ok(out)
}

/// Decodes exactly `N` bytes, rejecting any other length.
pub(crate) fn decode_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    if text.len() != 2 * N {
        return Err(Error::InvalidHex {
            reason: format!("expected {} digits, found {}", 2 * N, text.len()),
        });
    }

    let bytes = decode(text)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);

    Ok(out)
}

fn nibble(c: u8, index: usize) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidHex {
            reason: format!("unexpected character {:?} at {index}", c as char),
        }),
    }
}
