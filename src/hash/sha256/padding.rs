//! SHA-256 message padding
//!
//! A message of `L` bits is extended with a single `1` bit, the minimum
//! number of `0` bits bringing the length to 448 mod 512, and finally `L`
//! itself as a 64-bit big-endian integer. The padded message is therefore
//! always a whole number of 512-bit (64-byte) blocks.
//!
//! Padding only depends on the message length, so the hashers never
//! materialize the padded message: they fold full blocks straight from the
//! input and finish with a [`Tail`] holding the last one or two blocks.
//! [`pad`] builds the complete padded message for callers that want it.

/// Size of a SHA-256 message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Offset of the 64-bit length field inside the last block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Marker byte carrying the single `1` bit appended after the message.
const MARKER: u8 = 0x80;

/// Returns the padded length in bytes of a message of `len` bytes.
///
/// This is `64 * ceil((8 * len + 65) / 512)`: the message, the marker bit
/// and the 64-bit length field rounded up to whole blocks.
pub const fn padded_len(len: usize) -> usize {
    (len + 1 + 8).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Returns the full padded form of `message`.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let full = message.len() - message.len() % BLOCK_LEN;

    let mut out = Vec::with_capacity(padded_len(message.len()));
    out.extend_from_slice(&message[..full]);

    let tail = Tail::new(&message[full..], message.len() as u64);
    for block in tail.blocks() {
        out.extend_from_slice(block);
    }

    out
}

/// The final padded block(s) of a message.
///
/// Built from the bytes that did not fill a whole block and the total
/// message length. Holds one block, or two when the remainder leaves no
/// room for the marker byte and the length field.
#[derive(Clone, Debug)]
pub struct Tail {
    buf: [u8; 2 * BLOCK_LEN],
    len: usize,
}

impl Tail {
    /// Pads `remainder` given the total message length in bytes.
    ///
    /// `remainder` must be shorter than one block. The encoded bit length
    /// wraps modulo 2⁶⁴, matching FIPS 180-4 for messages of at most
    /// 2⁶⁴ − 1 bits.
    ///
    /// # Panics
    /// If `remainder` holds a whole block or more.
    pub fn new(remainder: &[u8], message_len: u64) -> Self {
        assert!(
            remainder.len() < BLOCK_LEN,
            "tail remainder must be shorter than {BLOCK_LEN} bytes, got {}",
            remainder.len()
        );

        let mut buf = [0u8; 2 * BLOCK_LEN];
        let rem = remainder.len();

        buf[..rem].copy_from_slice(remainder);
        buf[rem] = MARKER;

        // Not enough space left for the length field: spill into a
        // second, otherwise zeroed block.
        let len = if rem >= LENGTH_OFFSET {
            2 * BLOCK_LEN
        } else {
            BLOCK_LEN
        };

        let bit_len = message_len.wrapping_mul(8);
        buf[len - 8..len].copy_from_slice(&bit_len.to_be_bytes());

        Self { buf, len }
    }

    /// Number of blocks in the tail (1 or 2).
    pub fn block_count(&self) -> usize {
        self.len / BLOCK_LEN
    }

    /// Iterates over the tail blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8; BLOCK_LEN]> {
        let (blocks, _) = self.buf[..self.len].as_chunks::<BLOCK_LEN>();
        blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_one_block() {
        let padded = pad(&[]);

        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn abc_layout() {
        let padded = pad(b"abc");

        assert_eq!(&padded[..4], &[b'a', b'b', b'c', 0x80]);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn spill_into_second_block() {
        // 55 bytes still fit marker + length in one block, 56 do not.
        assert_eq!(Tail::new(&[0u8; 55], 55).block_count(), 1);
        assert_eq!(Tail::new(&[0u8; 56], 56).block_count(), 2);
        assert_eq!(Tail::new(&[0u8; 63], 63).block_count(), 2);
    }

    #[test]
    fn tail_keeps_remainder_bytes() {
        let tail = Tail::new(&[0xAA; 63], 63);
        let bytes: Vec<u8> = tail.blocks().flatten().copied().collect();

        assert_eq!(bytes.len(), 128);
        assert!(bytes[..63].iter().all(|&b| b == 0xAA));
        assert_eq!(bytes[63], 0x80);
    }

    #[test]
    #[should_panic(expected = "shorter than 64 bytes")]
    fn tail_rejects_whole_block() {
        let _ = Tail::new(&[0xAA; 64], 64);
    }

    #[test]
    #[should_panic(expected = "shorter than 64 bytes")]
    fn tail_rejects_remainder_overlapping_length_field() {
        let _ = Tail::new(&[0xAA; 124], 124);
    }

    #[test]
    fn full_blocks_keep_their_bytes() {
        let message: Vec<u8> = (0..130u8).collect();
        let padded = pad(&message);

        assert_eq!(padded.len(), 192);
        assert_eq!(&padded[..130], &message[..]);
        assert_eq!(padded[130], 0x80);
        assert_eq!(&padded[184..], &(130u64 * 8).to_be_bytes());
    }

    #[test]
    fn padded_len_matches_block_formula() {
        for len in 0..300usize {
            let bits = len * 8 + 65;
            let expected = 64 * bits.div_ceil(512);

            assert_eq!(padded_len(len), expected, "len = {len}");
            assert_eq!(pad(&vec![0xA5; len]).len(), expected, "len = {len}");
        }
    }
}
