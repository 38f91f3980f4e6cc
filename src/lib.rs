//! FIPS-SHA256: SHA-256 Digest Engine
//!
//! This library computes the SHA-256 digest (FIPS PUB 180-4) of a byte
//! message in a single call:
//!
//! ```text
//! padded = M || 0x80 || 0x00* || be64(8·|M|)
//! H⁽ⁱ⁾   = H⁽ⁱ⁻¹⁾ + compress(H⁽ⁱ⁻¹⁾, schedule(Mᵢ))
//! digest = be32(H⁽ᴺ⁾₀) || … || be32(H⁽ᴺ⁾₇)
//! ```
//!
//! ## Architecture
//!
//! 1. **Padding**: message plus marker, zero fill and length field
//! 2. **Schedule**: 16 big-endian words expanded to 64
//! 3. **Compression**: 64 rounds over eight working variables
//! 4. **Accumulation**: wrapping add into the running state
//!
//! ## Usage
//!
//! ```
//! use fips_sha256::sha256;
//!
//! let digest = sha256(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod sha256;
pub mod digest;
pub mod error;
pub mod console;
pub mod vectors;

// WASM module
pub mod wasm;


// Re-exports for convenience
pub use sha256::{sha256, HashState, H0, K};
pub use digest::Digest;
pub use error::DigestError;
pub use console::{run_session, SessionSummary};
pub use vectors::{KnownAnswer, KNOWN_ANSWERS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pinned algorithm and driver parameters
pub mod params {
    /// Bytes per message block (512 bits)
    pub const BLOCK_BYTES: usize = 64;

    /// Bytes in a digest (256 bits)
    pub const DIGEST_BYTES: usize = 32;

    /// Bytes in the trailing big-endian length field
    pub const LENGTH_FIELD_BYTES: usize = 8;

    /// Largest message whose bit length fits in the length field (2⁶¹ - 1)
    pub const MAX_MESSAGE_BYTES: u64 = (1 << 61) - 1;

    /// Console line that ends a session
    pub const QUIT_SENTINEL: &str = "q";

    /// Console prompt printed before each read
    pub const PROMPT: &str = "Message to hash: ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_fips() {
        // FIPS 180-4 test vectors
        assert_eq!(
            sha256(b"").unwrap().to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        assert_eq!(
            sha256(b"abc").unwrap().to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_params_consistent() {
        assert_eq!(params::BLOCK_BYTES, sha256::BLOCK_WORDS * 4);
        assert_eq!(params::DIGEST_BYTES, sha256::STATE_WORDS * 4);
        assert_eq!(params::MAX_MESSAGE_BYTES.checked_mul(8), Some(u64::MAX - 7));
        assert!((params::MAX_MESSAGE_BYTES + 1).checked_mul(8).is_none());
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Digest>();
        assert_send_sync::<HashState>();
    }
}
