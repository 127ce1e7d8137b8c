//! Hex text conversions
//!
//! Wire text carries bytes as two hex digits each, big-endian, without a
//! `0x` prefix. Input is accepted in either case; output is always
//! upper-case.

use byteorder::{BigEndian, ByteOrder};
use hex::FromHexError;

use crate::error::{Error, Result};

/// Decode hex text into bytes
///
/// # Errors
///
/// Returns [`Error::MalformedHex`] if the text has an odd number of digits
/// or contains anything other than hex digits.
///
/// # Examples
///
/// ```
/// use hubwire_core::hex;
///
/// assert_eq!(hex::hex_to_bytes("0aFF").unwrap(), vec![0x0A, 0xFF]);
/// assert!(hex::hex_to_bytes("AB0").is_err());
/// ```
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|err| match err {
        FromHexError::OddLength | FromHexError::InvalidStringLength => {
            Error::malformed_hex(text, "odd number of hex digits")
        }
        FromHexError::InvalidHexCharacter { .. } => {
            Error::malformed_hex(text, "non-hex character")
        }
    })
}

/// Render bytes as upper-case hex, two digits per byte
pub fn bytes_to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}

/// Render bytes as upper-case hex with a delimiter between bytes
///
/// ```
/// use hubwire_core::hex;
///
/// assert_eq!(hex::bytes_to_hex_delimited(&[0x5E, 0x86, 0x72], ","), "5E,86,72");
/// ```
pub fn bytes_to_hex_delimited(bytes: &[u8], delimiter: &str) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Reverse the byte order of hex text
///
/// Swaps whole byte pairs, so `"12AF"` becomes `"AF12"`. Digit case is
/// preserved. Applying it twice yields the input.
///
/// # Errors
///
/// Returns [`Error::MalformedHex`] on odd length or non-hex characters.
pub fn reverse_byte_order(text: &str) -> Result<String> {
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::malformed_hex(text, "non-hex character"));
    }
    if text.len() % 2 != 0 {
        return Err(Error::malformed_hex(text, "odd number of hex digits"));
    }

    let mut reversed = String::with_capacity(text.len());
    for pair in text.as_bytes().chunks_exact(2).rev() {
        reversed.push(char::from(pair[0]));
        reversed.push(char::from(pair[1]));
    }
    Ok(reversed)
}

/// Number of bytes needed to hold `value` (at least one)
pub fn byte_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(8).max(1)
}

/// Render an integer as hex padded to at least `min_bytes` bytes
///
/// The result always covers a whole number of bytes.
///
/// ```
/// use hubwire_core::hex;
///
/// assert_eq!(hex::int_to_hex(0x0B05, 2), "0B05");
/// assert_eq!(hex::int_to_hex(5, 0), "05");
/// assert_eq!(hex::int_to_hex(0x12345, 2), "012345");
/// ```
pub fn int_to_hex(value: u64, min_bytes: usize) -> String {
    let width = byte_len(value).max(min_bytes) * 2;
    format!("{value:0width$X}")
}

/// Render integers with [`int_to_hex`], joined by `delimiter`
pub fn ints_to_hex_delimited(values: &[u64], min_bytes: usize, delimiter: &str) -> String {
    values
        .iter()
        .map(|&value| int_to_hex(value, min_bytes))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Parse a hex integer such as `"0x0001"` or `" FF "`
///
/// # Errors
///
/// Returns [`Error::MalformedHex`] if the digits are missing, invalid or
/// longer than 16.
pub fn hex_to_int(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::malformed_hex(text, "no hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::malformed_hex(text, "non-hex character"));
    }
    if digits.len() > 16 {
        return Err(Error::malformed_hex(text, "more than 16 hex digits"));
    }

    u64::from_str_radix(digits, 16).map_err(|_| Error::malformed_hex(text, "non-hex character"))
}

/// Big-endian bytes of `value`, left-padded to at least `min_bytes`
pub fn int_to_bytes(value: u64, min_bytes: usize) -> Vec<u8> {
    let len = byte_len(value).max(min_bytes);
    let width = len.min(8);
    let mut bytes = vec![0; len];
    BigEndian::write_uint(&mut bytes[len - width..], value, width);
    bytes
}

/// Read big-endian bytes as an unsigned integer
///
/// # Errors
///
/// Returns [`Error::ValueTooLarge`] if the significant bytes exceed eight.
pub fn bytes_to_int(bytes: &[u8]) -> Result<u64> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];

    match significant.len() {
        0 => Ok(0),
        len if len <= 8 => Ok(BigEndian::read_uint(significant, len)),
        _ => Err(Error::value_too_large(
            format!("0x{}", bytes_to_hex(significant)),
            8,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("00ff10").unwrap(), vec![0x00, 0xFF, 0x10]);
        assert_eq!(hex_to_bytes("5E86").unwrap(), vec![0x5E, 0x86]);
    }

    #[test]
    fn test_hex_to_bytes_rejects_malformed() {
        assert!(matches!(hex_to_bytes("AB0"), Err(Error::MalformedHex { .. })));
        assert!(matches!(hex_to_bytes("ZZ"), Err(Error::MalformedHex { .. })));
        assert!(matches!(hex_to_bytes("0x10"), Err(Error::MalformedHex { .. })));
    }

    #[test]
    fn test_bytes_to_hex_upper_case() {
        assert_eq!(bytes_to_hex([0xAB, 0x01, 0xFF]), "AB01FF");
        assert_eq!(bytes_to_hex(b""), "");
    }

    #[test]
    fn test_bytes_to_hex_delimited() {
        assert_eq!(
            bytes_to_hex_delimited(&[0x5E, 0x86, 0x72, 0x98, 0x84], ","),
            "5E,86,72,98,84"
        );
        assert_eq!(bytes_to_hex_delimited(&[0x01, 0x02], " "), "01 02");
        assert_eq!(bytes_to_hex_delimited(&[], ","), "");
    }

    #[test]
    fn test_reverse_known_vectors() {
        assert_eq!(reverse_byte_order("12AF").unwrap(), "AF12");
        assert_eq!(reverse_byte_order("AABBCCDDEE").unwrap(), "EEDDCCBBAA");
        assert_eq!(reverse_byte_order("9907").unwrap(), "0799");
        assert_eq!(reverse_byte_order("").unwrap(), "");
    }

    #[test]
    fn test_reverse_absent_input() {
        let absent: Option<&str> = None;
        assert_eq!(absent.map(reverse_byte_order).transpose().unwrap(), None);
    }

    #[test]
    fn test_reverse_rejects_odd_length() {
        let result = reverse_byte_order("AB0");
        assert!(matches!(result, Err(Error::MalformedHex { .. })));
        assert!(reverse_byte_order("A").is_err());
        assert!(reverse_byte_order("GG").is_err());
    }

    #[test]
    fn test_int_to_hex() {
        assert_eq!(int_to_hex(0, 1), "00");
        assert_eq!(int_to_hex(255, 1), "FF");
        assert_eq!(int_to_hex(256, 1), "0100");
        assert_eq!(int_to_hex(100, 2), "0064");
        assert_eq!(int_to_hex(0x27AE_D053, 4), "27AED053");
    }

    #[test]
    fn test_ints_to_hex_delimited() {
        let clusters = [0, 3, 4, 5, 6, 0x0B05, 0xFC01, 0xFC08];
        assert_eq!(
            ints_to_hex_delimited(&clusters, 2, ","),
            "0000,0003,0004,0005,0006,0B05,FC01,FC08"
        );
    }

    #[test]
    fn test_hex_to_int() {
        assert_eq!(hex_to_int("FF").unwrap(), 255);
        assert_eq!(hex_to_int("0x0001").unwrap(), 1);
        assert_eq!(hex_to_int(" 0B05 ").unwrap(), 0x0B05);
        assert!(hex_to_int("0x").is_err());
        assert!(hex_to_int("+1").is_err());
        assert!(hex_to_int("12345678901234567").is_err());
    }

    #[test]
    fn test_int_bytes_conversion() {
        assert_eq!(int_to_bytes(0x0102, 1), vec![0x01, 0x02]);
        assert_eq!(int_to_bytes(0x01, 4), vec![0x00, 0x00, 0x00, 0x01]);
        assert_eq!(int_to_bytes(0, 0), vec![0x00]);
        assert_eq!(int_to_bytes(1, 10).len(), 10);

        assert_eq!(bytes_to_int(&[0x01, 0x02]).unwrap(), 0x0102);
        assert_eq!(bytes_to_int(&[]).unwrap(), 0);
        assert_eq!(bytes_to_int(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 7]).unwrap(), 7);
        assert!(matches!(
            bytes_to_int(&[1, 0, 0, 0, 0, 0, 0, 0, 0]),
            Err(Error::ValueTooLarge { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
            let text = bytes_to_hex(&bytes);
            prop_assert_eq!(hex_to_bytes(&text).unwrap(), bytes);
            prop_assert_eq!(bytes_to_hex(hex_to_bytes(&text.to_lowercase()).unwrap()), text);
        }

        #[test]
        fn prop_reverse_is_involution(text in "([0-9a-fA-F]{2}){0,16}") {
            let once = reverse_byte_order(&text).unwrap();
            prop_assert_eq!(once.len(), text.len());
            prop_assert_eq!(reverse_byte_order(&once).unwrap(), text);
        }

        #[test]
        fn prop_int_hex_round_trip(value in any::<u64>(), min_bytes in 0usize..10) {
            let text = int_to_hex(value, min_bytes);
            prop_assert!(text.len() >= min_bytes * 2);
            prop_assert_eq!(hex_to_int(&text[text.len().saturating_sub(16)..]).unwrap(), value);
            prop_assert_eq!(bytes_to_int(&int_to_bytes(value, min_bytes)).unwrap(), value);
        }
    }
}
