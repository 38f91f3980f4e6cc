//! Message Padding (FIPS PUB 180-4, section 5.1.1)
//!
//! `message || 0x80 || 0x00* || bitlen_be64`, with the zero run sized so the
//! total length is a positive multiple of 64. When fewer than nine bytes
//! remain in the last partial block the padding spills into one more block;
//! that falls out of the modulo arithmetic below.

use crate::error::DigestError;
use crate::params::{BLOCK_BYTES, LENGTH_FIELD_BYTES, MAX_MESSAGE_BYTES};

/// Marker byte appended directly after the message
pub const PAD_MARKER: u8 = 0x80;

/// Offset within the final block where the length field starts
const LENGTH_OFFSET: usize = BLOCK_BYTES - LENGTH_FIELD_BYTES;

/// Message length in bits, as encoded in the trailing length field.
///
/// Fails with [`DigestError::InputTooLarge`] when `8 * len` does not fit in
/// 64 bits.
pub fn bit_length(len: usize) -> Result<u64, DigestError> {
    let len64 = u64::try_from(len).map_err(|_| DigestError::InputTooLarge { len })?;
    if len64 > MAX_MESSAGE_BYTES {
        return Err(DigestError::InputTooLarge { len });
    }
    len64.checked_mul(8).ok_or(DigestError::InputTooLarge { len })
}

/// Number of zero bytes between the marker and the length field for a
/// message of `len` bytes.
fn zero_fill(len: usize) -> usize {
    let used = (len % BLOCK_BYTES) + 1;
    (BLOCK_BYTES + LENGTH_OFFSET - used) % BLOCK_BYTES
}

/// Length of the padded buffer for a message of `len` bytes
pub fn padded_len(len: usize) -> Result<usize, DigestError> {
    bit_length(len)?;
    len.checked_add(1 + zero_fill(len) + LENGTH_FIELD_BYTES)
        .ok_or(DigestError::InputTooLarge { len })
}

/// Number of 64-byte blocks the padded message occupies
pub fn block_count(len: usize) -> Result<usize, DigestError> {
    Ok(padded_len(len)? / BLOCK_BYTES)
}

/// Build the padded buffer for `message`.
///
/// The result is always a positive multiple of [`BLOCK_BYTES`] long.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, DigestError> {
    let bitlen = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut buffer = Vec::with_capacity(total);
    buffer.extend_from_slice(message);
    buffer.push(PAD_MARKER);
    buffer.resize(buffer.len() + zero_fill(message.len()), 0x00);
    buffer.extend_from_slice(&bitlen.to_be_bytes());

    debug_assert_eq!(buffer.len(), total);
    debug_assert_eq!(buffer.len() % BLOCK_BYTES, 0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_empty() {
        let padded = pad(b"").unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..64].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pad_abc_layout() {
        let padded = pad(b"abc").unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        // 24 bits, big-endian in the last eight bytes
        assert_eq!(&padded[56..], &[0, 0, 0, 0, 0, 0, 0, 0x18]);
    }

    #[test]
    fn test_block_boundaries() {
        let cases = [
            (0, 1),
            (55, 1),
            (56, 2),
            (57, 2),
            (63, 2),
            (64, 2),
            (119, 2),
            (120, 3),
        ];
        for (len, blocks) in cases {
            assert_eq!(block_count(len).unwrap(), blocks, "len = {}", len);
            let padded = pad(&vec![0x61; len]).unwrap();
            assert_eq!(padded.len(), blocks * BLOCK_BYTES, "len = {}", len);
            assert_eq!(padded[len], PAD_MARKER, "len = {}", len);
        }
    }

    #[test]
    fn test_length_field_is_big_endian() {
        let padded = pad(&[0u8; 300]).unwrap();
        let tail: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
        // 2400 = 0x0960
        assert_eq!(tail, [0, 0, 0, 0, 0, 0, 0x09, 0x60]);
        assert_eq!(u64::from_be_bytes(tail), 2400);
    }

    #[test]
    fn test_spill_block_is_marker_free() {
        // 56 bytes: marker stays in block one, length lands at the end of block two
        let padded = pad(&[0xffu8; 56]).unwrap();
        assert_eq!(padded.len(), 128);
        assert_eq!(padded[56], PAD_MARKER);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(&padded[120..], &448u64.to_be_bytes());
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0).unwrap(), 0);
        assert_eq!(bit_length(3).unwrap(), 24);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_input_too_large() {
        let limit = MAX_MESSAGE_BYTES as usize;
        assert_eq!(bit_length(limit).unwrap(), u64::MAX - 7);
        assert!(matches!(
            bit_length(limit + 1),
            Err(DigestError::InputTooLarge { .. })
        ));
        assert!(matches!(
            padded_len(usize::MAX),
            Err(DigestError::InputTooLarge { len }) if len == usize::MAX
        ));
    }
}
