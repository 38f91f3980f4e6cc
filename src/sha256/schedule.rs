//! Message Schedule Expansion (FIPS PUB 180-4, section 6.2.2 step 1)

use super::functions::{small_sigma0, small_sigma1};
use super::{BLOCK_WORDS, ROUNDS};
use crate::params::BLOCK_BYTES;

/// Expand one 64-byte block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big-endian `u32`s; the rest follow the
/// σ recurrence modulo 2³².
pub fn expand(block: &[u8; BLOCK_BYTES]) -> [u32; ROUNDS] {
    let mut w = [0u32; ROUNDS];

    for (t, chunk) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in BLOCK_WORDS..ROUNDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}
