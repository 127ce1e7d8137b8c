//! CRC-16 used by Z-Wave CRC-16 encapsulation
//!
//! CRC-CCITT variant:
//! 1. Polynomial 0x1021, initial value 0x1D0F
//! 2. Bits processed most significant first, no reflection
//! 3. No final XOR

use tracing::trace;

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0x1D0F;

/// Calculate the CRC-16 of `data`
///
/// # Algorithm
///
/// ```text
/// crc = 0x1D0F
/// for each byte: crc ^= byte << 8
///     repeat 8 times: crc = (crc << 1) ^ (0x1021 if top bit was set)
/// ```
///
/// # Examples
///
/// ```
/// use hubwire_core::checksum;
///
/// assert_eq!(checksum::calculate(b"123456789"), 0xE5CC);
/// ```
pub fn calculate(data: &[u8]) -> u16 {
    let mut crc = INITIAL;

    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }

    trace!(
        data_len = data.len(),
        checksum = format!("0x{:04X}", crc),
        "Calculated CRC-16"
    );

    crc
}

/// Verify checksum
pub fn verify(data: &[u8], expected: u16) -> bool {
    calculate(data) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_check_value() {
        assert_eq!(calculate(b"123456789"), 0xE5CC);
    }

    #[test]
    fn test_checksum_empty() {
        assert_eq!(calculate(&[]), INITIAL);
    }

    #[test]
    fn test_checksum_verify() {
        let data = [0x56, 0x01, 0x20, 0x01, 0xFF];
        let checksum = calculate(&data);

        assert!(verify(&data, checksum));
        assert!(!verify(&data, checksum.wrapping_add(1)));
    }

    #[test]
    fn test_checksum_detects_single_bit_flip() {
        let data = [0x56, 0x01, 0x25, 0x03, 0x00];
        let mut flipped = data;
        flipped[4] ^= 0x01;

        assert_ne!(calculate(&data), calculate(&flipped));
    }
}
