//! Field-level access to command payloads
//!
//! A payload is the byte sequence following the class/command header.
//! Fields sit at fixed byte offsets, optionally narrowed to a bit range:
//!
//! ```text
//!   byte 1:  7   6   5   4   3   2   1   0
//!          ┌───────────┬───────────────────┐
//!          │  format   │      length       │
//!          │ bits(1,5,3)│   bits(1,0,5)    │
//!          └───────────┴───────────────────┘
//! ```
//!
//! Multi-byte fields are big-endian. Bit 0 is the least significant bit.
//!
//! [`PayloadReader`] returns `None` for any field whose bytes are missing,
//! so short payloads from devices that omit trailing fields decode
//! without error. [`PayloadWriter`] grows the buffer with zeros as fields
//! are written, ORing sub-byte fields into shared bytes.

use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, Bytes, BytesMut};

/// Mask covering the low `width` bits
fn mask(width: u8) -> u8 {
    if width >= 8 { 0xFF } else { (1u8 << width) - 1 }
}

/// Read-only view over a payload that tolerates missing trailing bytes
#[derive(Debug, Clone, Copy)]
pub struct PayloadReader<'a> {
    bytes: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of bytes available
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whole byte at `at`
    pub fn u8(&self, at: usize) -> Option<u8> {
        self.bytes.get(at).copied()
    }

    /// `width` bits starting at bit `shift` of byte `at`
    pub fn bits(&self, at: usize, shift: u8, width: u8) -> Option<u8> {
        self.u8(at).map(|byte| (byte >> shift) & mask(width))
    }

    /// Single bit of byte `at`
    pub fn flag(&self, at: usize, bit: u8) -> Option<bool> {
        self.bits(at, bit, 1).map(|value| value == 1)
    }

    /// Big-endian 16-bit value at `at`
    pub fn u16(&self, at: usize) -> Option<u16> {
        self.slice(at, 2).map(BigEndian::read_u16)
    }

    /// Big-endian 32-bit value at `at`
    pub fn u32(&self, at: usize) -> Option<u32> {
        self.slice(at, 4).map(BigEndian::read_u32)
    }

    /// Fixed-size block at `at`, only when every byte is present
    pub fn array<const N: usize>(&self, at: usize) -> Option<[u8; N]> {
        self.slice(at, N).and_then(|bytes| bytes.try_into().ok())
    }

    /// Everything from `at` to the end
    pub fn rest(&self, at: usize) -> Option<Vec<u8>> {
        self.bytes.get(at..).map(<[u8]>::to_vec)
    }

    /// Up to `len` bytes from `at`, clamped to what is available
    pub fn take(&self, at: usize, len: usize) -> Option<Vec<u8>> {
        let rest = self.bytes.get(at..)?;
        Some(rest[..len.min(rest.len())].to_vec())
    }

    /// Exactly `len` bytes from `at`
    pub fn slice(&self, at: usize, len: usize) -> Option<&'a [u8]> {
        self.bytes.get(at..at.checked_add(len)?)
    }
}

/// Payload builder addressed by byte offset
///
/// Field writers take references so field values can be passed straight
/// from a command struct.
#[derive(Debug, Default)]
pub struct PayloadWriter {
    buf: BytesMut,
}

impl PayloadWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn grow_to(&mut self, end: usize) {
        if self.buf.len() < end {
            self.buf.resize(end, 0);
        }
    }

    pub fn u8(&mut self, at: usize, value: &u8) {
        self.grow_to(at + 1);
        self.buf[at] = *value;
    }

    /// OR `value` into `width` bits starting at bit `shift` of byte `at`
    pub fn bits(&mut self, at: usize, shift: u8, width: u8, value: &u8) {
        self.grow_to(at + 1);
        self.buf[at] |= (*value & mask(width)) << shift;
    }

    pub fn flag(&mut self, at: usize, bit: u8, value: &bool) {
        self.bits(at, bit, 1, &u8::from(*value));
    }

    pub fn u16(&mut self, at: usize, value: &u16) {
        self.grow_to(at + 2);
        BigEndian::write_u16(&mut self.buf[at..at + 2], *value);
    }

    pub fn u32(&mut self, at: usize, value: &u32) {
        self.grow_to(at + 4);
        BigEndian::write_u32(&mut self.buf[at..at + 4], *value);
    }

    pub fn array<const N: usize>(&mut self, at: usize, value: &[u8; N]) {
        self.grow_to(at + N);
        self.buf[at..at + N].copy_from_slice(value);
    }

    /// Write `value` from `at`, truncating anything already past it
    pub fn rest(&mut self, at: usize, value: &[u8]) {
        self.grow_to(at);
        self.buf.truncate(at);
        self.buf.put_slice(value);
    }

    /// Append raw bytes at the current end
    pub fn extend(&mut self, value: &[u8]) {
        self.buf.put_slice(value);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reader_fields() {
        let reader = PayloadReader::new(&[0xD3, 0x12, 0x34, 0x56, 0x78]);

        assert_eq!(reader.u8(0), Some(0xD3));
        assert_eq!(reader.bits(0, 5, 3), Some(0b110));
        assert_eq!(reader.bits(0, 0, 5), Some(0b10011));
        assert_eq!(reader.flag(0, 7), Some(true));
        assert_eq!(reader.flag(0, 2), Some(false));
        assert_eq!(reader.u16(1), Some(0x1234));
        assert_eq!(reader.u32(1), Some(0x1234_5678));
        assert_eq!(reader.array::<2>(3), Some([0x56, 0x78]));
        assert_eq!(reader.rest(3), Some(vec![0x56, 0x78]));
    }

    #[test]
    fn test_reader_short_payload() {
        let reader = PayloadReader::new(&[0x01, 0x02]);

        assert_eq!(reader.u8(2), None);
        assert_eq!(reader.u16(1), None);
        assert_eq!(reader.array::<4>(0), None);
        assert_eq!(reader.rest(2), Some(vec![]));
        assert_eq!(reader.rest(3), None);
        assert_eq!(reader.take(1, 5), Some(vec![0x02]));
        assert_eq!(reader.slice(usize::MAX, 2), None);
    }

    #[test]
    fn test_writer_packs_bits() {
        let mut writer = PayloadWriter::new();
        writer.bits(1, 5, 3, &0x01);
        writer.bits(1, 0, 5, &0x1F);
        writer.flag(0, 7, &true);
        writer.u8(2, &0xAA);

        assert_eq!(writer.finish(), vec![0x80, 0x3F, 0xAA]);
    }

    #[test]
    fn test_writer_masks_oversized_values() {
        let mut writer = PayloadWriter::new();
        writer.bits(0, 4, 4, &0xFF);
        writer.bits(0, 0, 4, &0x12);

        assert_eq!(writer.finish(), vec![0xF2]);
    }

    #[test]
    fn test_writer_pads_with_zeros() {
        let mut writer = PayloadWriter::new();
        writer.u16(2, &0xBEEF);
        writer.flag(5, 0, &false);

        assert_eq!(writer.finish(), vec![0x00, 0x00, 0xBE, 0xEF, 0x00, 0x00]);
    }

    #[test]
    fn test_writer_rest() {
        let mut writer = PayloadWriter::new();
        writer.u8(0, &0x01);
        writer.rest(3, &[0x04, 0x05]);
        writer.extend(&[0x06]);

        assert_eq!(writer.len(), 6);
        assert_eq!(writer.freeze().as_ref(), &[0x01, 0x00, 0x00, 0x04, 0x05, 0x06]);
    }
}
