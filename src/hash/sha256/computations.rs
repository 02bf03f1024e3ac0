//! SHA-256 round primitives
//!
//! Logical functions, message schedule expansion and the 64-round fold of
//! the compression function. All additions wrap modulo 2³².

use super::K256;
use super::padding::BLOCK_LEN;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Choose: each bit of `e` selects the bit of `f` (1) or `g` (0).
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// Majority of the three inputs, bit by bit.
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expands a block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big-endian `u32`s, words 16..64
/// follow `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]`.
pub fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0u32; 64];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}

/// Runs the 64 rounds over `w` and adds the result back into `state`.
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(K256.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256::H256_INIT;
    use crate::hash::sha256::padding::pad;

    #[test]
    fn choose_and_majority() {
        assert_eq!(ch(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(maj(0b1100, 0b1010, 0b0110), 0b1110);
    }

    #[test]
    fn schedule_copies_block_words() {
        let mut block = [0u8; 64];
        block[..4].copy_from_slice(&0x6162_6380u32.to_be_bytes());
        block[60..].copy_from_slice(&0x18u32.to_be_bytes());

        let w = schedule(&block);

        assert_eq!(w[0], 0x6162_6380);
        assert_eq!(w[15], 0x18);
        // FIPS 180-2 appendix B.1, one-block "abc" schedule.
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000f_0000);
    }

    #[test]
    fn abc_single_block_state() {
        let padded = pad(b"abc");
        let block: &[u8; 64] = padded[..].try_into().unwrap();

        let mut state = H256_INIT;
        all_rounds(&mut state, &schedule(block));

        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }
}
