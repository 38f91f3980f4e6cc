//! Hash State and Compression Function (FIPS PUB 180-4, section 6.2.2)

use super::constants::{H0, K};
use super::functions::{big_sigma0, big_sigma1, ch, maj};
use super::schedule::expand;
use super::{ROUNDS, STATE_WORDS};
use crate::digest::Digest;
use crate::params::{BLOCK_BYTES, DIGEST_BYTES};

/// Running hash value H⁽ⁱ⁾: eight 32-bit words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState {
    words: [u32; STATE_WORDS],
}

impl HashState {
    /// State before the first block (H⁽⁰⁾)
    pub fn new() -> Self {
        HashState { words: H0 }
    }

    /// Current state words h0..h7
    pub fn words(&self) -> [u32; STATE_WORDS] {
        self.words
    }

    /// Process a single 512-bit block
    pub fn compress(&mut self, block: &[u8; BLOCK_BYTES]) {
        let w = expand(block);

        // Initialize working variables
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.words;

        // 64 rounds
        for t in 0..ROUNDS {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K[t])
                .wrapping_add(w[t]);
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

        // Accumulate into the running state
        for (word, v) in self.words.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(v);
        }
    }

    /// Serialize the state as a big-endian digest
    pub fn to_digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_BYTES];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from_bytes(out)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::padding::pad;

    #[test]
    fn test_new_state_is_h0() {
        assert_eq!(HashState::new().words(), H0);
        assert_eq!(HashState::default(), HashState::new());
    }

    #[test]
    fn test_single_block_abc() {
        let padded = pad(b"abc").unwrap();
        let mut state = HashState::new();
        state.compress(padded[..64].try_into().unwrap());
        assert_eq!(
            state.words(),
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
                0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
            ]
        );
    }

    #[test]
    fn test_compression_is_order_sensitive() {
        let one = [0x11u8; 64];
        let two = [0x22u8; 64];

        let mut forward = HashState::new();
        forward.compress(&one);
        forward.compress(&two);

        let mut backward = HashState::new();
        backward.compress(&two);
        backward.compress(&one);

        assert_ne!(forward, backward);
    }

    #[test]
    fn test_digest_serialization_is_big_endian() {
        let state = HashState::new();
        let digest = state.to_digest();
        assert_eq!(&digest.as_bytes()[..4], &[0x6a, 0x09, 0xe6, 0x67]);
        assert_eq!(&digest.as_bytes()[28..], &[0x5b, 0xe0, 0xcd, 0x19]);
        assert_eq!(digest.words(), H0);
    }
}
