//! Error types

use thiserror::Error;

/// Errors from hashing, digest parsing and the console driver
#[derive(Debug, Error)]
pub enum DigestError {
    /// Message bit length does not fit the 64-bit length field
    #[error("message of {len} bytes exceeds the SHA-256 length limit")]
    InputTooLarge {
        /// Message length in bytes
        len: usize,
    },

    /// Digest text is not valid hex
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Digest text decodes to the wrong number of bytes
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count found
        actual: usize,
    },

    /// Console read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DigestError::InputTooLarge { len: 42 };
        assert_eq!(
            err.to_string(),
            "message of 42 bytes exceeds the SHA-256 length limit"
        );

        let err = DigestError::InvalidLength { expected: 32, actual: 3 };
        assert_eq!(
            err.to_string(),
            "invalid digest length: expected 32 bytes, got 3"
        );
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DigestError = io.into();
        assert!(matches!(err, DigestError::Io(_)));
    }
}
