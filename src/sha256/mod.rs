//! SHA-256 Implementation - FIPS PUB 180-4 Compliant
//!
//! One-shot digest engine. The pipeline is:
//!
//! 1. pad the message into a whole number of 64-byte blocks ([`padding`])
//! 2. expand each block into a 64-word schedule ([`schedule`])
//! 3. run the 64-round compression and fold it into the running state
//!    ([`compress`])
//! 4. serialize the final state big-endian
//!
//! Every call owns its own state, so independent calls may run concurrently.

pub mod constants;
pub mod functions;
pub mod padding;
pub mod schedule;
pub mod compress;

pub use constants::{H0, K};
pub use compress::HashState;
pub use padding::{bit_length, block_count, pad, padded_len};
pub use schedule::expand;

use crate::digest::Digest;
use crate::error::DigestError;
use crate::params::BLOCK_BYTES;

/// Number of 32-bit words in one block
pub const BLOCK_WORDS: usize = BLOCK_BYTES / 4;

/// Number of compression rounds (and schedule words)
pub const ROUNDS: usize = 64;

/// Number of 32-bit words in the hash state
pub const STATE_WORDS: usize = 8;

/// Compute SHA-256 of `message` in one call.
///
/// The only failure is [`DigestError::InputTooLarge`], for messages whose bit
/// length overflows the 64-bit length field.
pub fn sha256(message: &[u8]) -> Result<Digest, DigestError> {
    let padded = pad(message)?;
    log::debug!(
        "sha256: {} message bytes, {} blocks",
        message.len(),
        padded.len() / BLOCK_BYTES
    );

    let mut state = HashState::new();
    for (index, chunk) in padded.chunks_exact(BLOCK_BYTES).enumerate() {
        let mut block = [0u8; BLOCK_BYTES];
        block.copy_from_slice(chunk);
        state.compress(&block);
        log::trace!("sha256: block {} -> {:08x?}", index, state.words());
    }

    Ok(state.to_digest())
}
