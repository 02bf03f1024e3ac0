//! SHA-256 core hashing functions
//!
//! This module drives the compression function over a message:
//! - [`compress`] folds a single 512-bit block into the running state
//! - [`sha256`] hashes a complete message in one call
//! - [`Sha256`] absorbs a message in arbitrary pieces
//!
//! Both hashers finish through [`Tail`], so they agree byte for byte on
//! how a message is padded.

use super::H256_INIT;
use super::computations::{all_rounds, schedule};
use super::padding::{BLOCK_LEN, Tail};
use crate::digest::Digest;

/// Compresses a single 512-bit message block into `state`.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    let w = schedule(block);
    all_rounds(state, &w);
}

/// Folds every whole block of `input` into `state` and returns the
/// bytes left over.
fn compress_blocks<'a>(input: &'a [u8], state: &mut [u32; 8]) -> &'a [u8] {
    let (blocks, rem) = input.as_chunks::<BLOCK_LEN>();

    for block in blocks {
        compress(block, state);
    }

    rem
}

/// Computes the SHA-256 digest of `input`.
///
/// Full blocks are compressed directly from the input; only the final
/// one or two padded blocks are copied.
pub fn sha256(input: &[u8]) -> Digest {
    let mut state = H256_INIT;

    let rem = compress_blocks(input, &mut state);

    for block in Tail::new(rem, input.len() as u64).blocks() {
        compress(block, &mut state);
    }

    Digest::from_state(state)
}

/// Incremental SHA-256 hasher.
///
/// Data may be fed in any number of [`update`](Sha256::update) calls;
/// the digest equals [`sha256`] of the concatenated input. Each hasher
/// owns its state, so independent hashers can run on separate threads.
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    length: u64,
}

impl Sha256 {
    /// Creates a hasher in the initial state.
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let mut data = data.as_ref();
        self.length = self.length.wrapping_add(data.len() as u64);

        // Top up a partially filled buffer first.
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            let block = self.buffer;
            compress(&block, &mut self.state);
            self.buffered = 0;
        }

        let rem = compress_blocks(data, &mut self.state);

        self.buffer[..rem.len()].copy_from_slice(rem);
        self.buffered = rem.len();
    }

    /// Number of bytes absorbed so far.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns `true` if nothing has been absorbed yet.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Pads the buffered bytes and returns the final digest.
    pub fn finalize(mut self) -> Digest {
        let tail = Tail::new(&self.buffer[..self.buffered], self.length);

        for block in tail.blocks() {
            compress(block, &mut self.state);
        }

        Digest::from_state(self.state)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_in_pieces_matches_one_shot() {
        let message: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let expected = sha256(&message);

        for step in [1, 3, 55, 56, 63, 64, 65, 127, 999] {
            let mut hasher = Sha256::new();
            for piece in message.chunks(step) {
                hasher.update(piece);
            }

            assert_eq!(hasher.len(), 1000);
            assert_eq!(hasher.finalize(), expected, "step = {step}");
        }
    }

    #[test]
    fn fresh_hasher_is_empty_digest() {
        let hasher = Sha256::default();

        assert!(hasher.is_empty());
        assert_eq!(hasher.finalize(), sha256(&[]));
    }

    #[test]
    fn empty_updates_are_neutral() {
        let mut hasher = Sha256::new();
        hasher.update(b"");
        hasher.update(b"abc");
        hasher.update(b"");

        assert_eq!(hasher.finalize(), sha256(b"abc"));
    }
}
