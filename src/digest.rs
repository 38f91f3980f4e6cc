//! SHA-256 digest value
//!
//! Thirty-two bytes, i.e. the eight state words in big-endian order.
//! Renders either as contiguous lowercase hex or as the console form of
//! eight space-separated, zero-padded 8-digit groups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestError;
use crate::params::DIGEST_BYTES;

/// A 256-bit SHA-256 digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
    /// Wrap raw digest bytes
    pub const fn from_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Digest(bytes)
    }

    /// Digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Consume into raw bytes
    pub fn into_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }

    /// Decode the eight big-endian state words
    pub fn words(&self) -> [u32; 8] {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// 64 lowercase hex characters, no separators
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Eight groups of eight lowercase hex digits separated by single spaces
    pub fn to_grouped_hex(&self) -> String {
        self.words()
            .iter()
            .map(|w| format!("{:08x}", w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parse from 64 hex characters
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let bytes = hex::decode(s)?;
        let actual = bytes.len();
        let bytes: [u8; DIGEST_BYTES] =
            bytes.try_into().map_err(|_| DigestError::InvalidLength {
                expected: DIGEST_BYTES,
                actual,
            })?;
        Ok(Digest(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_grouped_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
