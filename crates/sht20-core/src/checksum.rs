//! CRC-8 checksum used by the SHT2x family
//!
//! Polynomial `x^8 + x^5 + x^4 + 1` (`0x31`), MSB first, initial value `0`,
//! no reflection and no final XOR. The sensor appends one checksum byte to
//! every pair of data bytes it sends.

/// Generator polynomial without the implicit x^8 term.
pub const CRC8_POLYNOMIAL: u32 = 0x31;

/// Number of data bytes covered by one checksum byte.
pub const CHECKSUM_COVERAGE: usize = 2;

/// Compute the checksum over `data`.
///
/// The register is wider than eight bits and only masked when the result is
/// taken, so bits shifted past bit 7 never feed back into the computation.
pub fn checksum(data: &[u8]) -> u8 {
    let mut crc: u32 = 0;

    for &byte in data {
        crc ^= byte as u32;

        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC8_POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    (crc & 0xFF) as u8
}

/// Validate a sensor frame: two data bytes followed by their checksum byte.
///
/// Returns `false` for frames too short to carry a checksum.
pub fn validate(frame: &[u8]) -> bool {
    match frame.get(CHECKSUM_COVERAGE) {
        Some(&expected) => checksum(&frame[..CHECKSUM_COVERAGE]) == expected,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasheet_vectors() {
        assert_eq!(checksum(&[0x00, 0xDC]), 0x79);
        assert_eq!(checksum(&[0x68, 0x3A]), 0x7C);
        assert_eq!(checksum(&[0x4E, 0x85]), 0x6B);
    }

    #[test]
    fn test_zero_data_has_zero_checksum() {
        assert_eq!(checksum(&[0x00, 0x00]), 0x00);
        assert!(validate(&[0x00, 0x00, 0x00]));
    }

    #[test]
    fn test_valid_frame() {
        assert!(validate(&[0x4E, 0x85, 0x6B]));
        assert!(validate(&[0x68, 0x3A, 0x7C]));
    }

    #[test]
    fn test_wrong_check_byte() {
        assert!(!validate(&[0x4E, 0x85, 0x6A]));
        assert!(!validate(&[0x4E, 0x85, 0x00]));
    }

    #[test]
    fn test_single_bit_flip_is_detected() {
        let frame = [0x4E, 0x85, 0x6B];

        for byte in 0..CHECKSUM_COVERAGE {
            for bit in 0..8 {
                let mut corrupted = frame;
                corrupted[byte] ^= 1 << bit;
                assert!(
                    !validate(&corrupted),
                    "flip of bit {} in byte {} went undetected",
                    bit,
                    byte
                );
            }
        }
    }

    #[test]
    fn test_short_frame_is_invalid() {
        assert!(!validate(&[]));
        assert!(!validate(&[0x4E]));
        assert!(!validate(&[0x4E, 0x85]));
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        // Only the first checksum triplet is inspected
        assert!(validate(&[0x4E, 0x85, 0x6B, 0xFF]));
    }
}
