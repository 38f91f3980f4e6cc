//! WASM Bindings
//!
//! Exposes hex digests to JavaScript.
//!
//! Build with:
//!   wasm-pack build --release --target web
//!
//! Usage in JavaScript:
//!   import init, { sha256_hex, sha256_grouped } from './pkg/fips_sha256.js';
//!   await init();
//!   const hex = sha256_hex(new TextEncoder().encode("abc"));

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::sha256::sha256;

/// SHA-256 of `input` as 64 lowercase hex characters
///
/// Returns an empty string for inputs beyond the length limit.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn sha256_hex(input: &[u8]) -> String {
    sha256_hex_internal(input)
}

/// Non-WASM version for testing
#[cfg(not(target_arch = "wasm32"))]
pub fn sha256_hex(input: &[u8]) -> String {
    sha256_hex_internal(input)
}

/// SHA-256 of `input` as eight space-separated 8-digit hex groups
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn sha256_grouped(input: &[u8]) -> String {
    sha256_grouped_internal(input)
}

/// Non-WASM version for testing
#[cfg(not(target_arch = "wasm32"))]
pub fn sha256_grouped(input: &[u8]) -> String {
    sha256_grouped_internal(input)
}

fn sha256_hex_internal(input: &[u8]) -> String {
    sha256(input).map(|d| d.to_hex()).unwrap_or_default()
}

fn sha256_grouped_internal(input: &[u8]) -> String {
    sha256(input).map(|d| d.to_grouped_hex()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_grouped() {
        assert_eq!(
            sha256_grouped(b""),
            "e3b0c442 98fc1c14 9afbf4c8 996fb924 27ae41e4 649b934c a495991b 7852b855"
        );
    }
}
