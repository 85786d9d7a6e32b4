//! Raw measurement extraction
//!
//! A measurement response is two big-endian data bytes followed by a CRC-8
//! byte. The two least significant data bits are status flags (bit 1 tells
//! temperature from humidity) and are not part of the reading.

use crate::checksum;
use crate::error::ProtocolError;

/// Length of a measurement response in bytes.
pub const RESPONSE_LEN: usize = 3;

/// Mask clearing the two status bits of a raw reading.
pub const STATUS_MASK: u16 = 0xFFFC;

/// Validate a measurement response and return its raw 16-bit value.
///
/// The frame must be exactly [`RESPONSE_LEN`] bytes and its checksum must
/// match. A rejected frame yields no value at all.
pub fn extract_raw_value(frame: &[u8]) -> Result<u16, ProtocolError> {
    if frame.len() != RESPONSE_LEN {
        return Err(ProtocolError::InvalidLength {
            expected: RESPONSE_LEN,
            actual: frame.len(),
        });
    }

    if !checksum::validate(frame) {
        return Err(ProtocolError::ChecksumMismatch {
            expected: checksum::checksum(&frame[..checksum::CHECKSUM_COVERAGE]),
            actual: frame[checksum::CHECKSUM_COVERAGE],
        });
    }

    Ok(u16::from_be_bytes([frame[0], frame[1]]) & STATUS_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_masked_value() {
        let raw = extract_raw_value(&[0x4E, 0x85, 0x6B]).unwrap();
        assert_eq!(raw, 0x4E85 & 0xFFFC);
        assert_eq!(raw, 0x4E84);
    }

    #[test]
    fn test_status_bits_are_cleared() {
        let raw = extract_raw_value(&[0x68, 0x3A, 0x7C]).unwrap();
        assert_eq!(raw & 0x0003, 0);
        assert_eq!(raw, 0x6838);
    }

    #[test]
    fn test_rejects_short_frame() {
        assert_eq!(
            extract_raw_value(&[0x4E, 0x85]),
            Err(ProtocolError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rejects_long_frame() {
        assert_eq!(
            extract_raw_value(&[0x4E, 0x85, 0x6B, 0x00]),
            Err(ProtocolError::InvalidLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_rejects_empty_frame() {
        assert!(matches!(
            extract_raw_value(&[]),
            Err(ProtocolError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        assert_eq!(
            extract_raw_value(&[0x4E, 0x85, 0x00]),
            Err(ProtocolError::ChecksumMismatch {
                expected: 0x6B,
                actual: 0x00
            })
        );
    }
}
