//! Amino binary decoder.
//!
//! A cursor over a byte slice. Message decoding loops over tags until the
//! slice is exhausted; nested messages hand out a sub-reader over their
//! length-delimited payload. Unknown fields are hard errors: the consensus
//! structures this crate decodes are closed, and silently skipping data
//! that feeds hashes or signatures would be unsound.

use crate::error::AminoError;
use crate::{WIRE_BYTES, WIRE_FIXED64, WIRE_VARINT};

/// Cursor-style amino reader.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once the whole input has been consumed.
    pub fn done(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Fails unless the input is fully consumed.
    pub fn expect_done(&self) -> Result<(), AminoError> {
        if self.done() {
            Ok(())
        } else {
            Err(AminoError::TrailingBytes)
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], AminoError> {
        if self.remaining() < n {
            return Err(AminoError::UnexpectedEof);
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn read_uvarint(&mut self) -> Result<u64, AminoError> {
        let mut v: u64 = 0;
        for i in 0..10 {
            let b = self.take(1)?[0];
            if i == 9 && b > 0x01 {
                return Err(AminoError::VarintOverflow);
            }
            v |= u64::from(b & 0x7f) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(v);
            }
        }
        Err(AminoError::VarintOverflow)
    }

    pub fn read_varint64(&mut self) -> Result<i64, AminoError> {
        Ok(self.read_uvarint()? as i64)
    }

    pub fn read_fixed64(&mut self) -> Result<u64, AminoError> {
        let bytes = self.take(8)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(arr))
    }

    /// Reads a field tag, returning `(field_number, wire_type)`.
    pub fn read_tag(&mut self) -> Result<(u32, u8), AminoError> {
        let tag = self.read_uvarint()?;
        let wire_type = (tag & 0x07) as u8;
        let field = (tag >> 3) as u32;
        if field == 0 {
            return Err(AminoError::ZeroFieldNumber);
        }
        if wire_type != WIRE_VARINT && wire_type != WIRE_FIXED64 && wire_type != WIRE_BYTES {
            return Err(AminoError::InvalidWireType(wire_type));
        }
        Ok((field, wire_type))
    }

    /// Reads a length-delimited payload.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], AminoError> {
        let len = self.read_uvarint()?;
        if len > self.remaining() as u64 {
            return Err(AminoError::LengthOutOfBounds(len));
        }
        self.take(len as usize)
    }

    pub fn read_string(&mut self) -> Result<String, AminoError> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes.to_vec()).map_err(|_| AminoError::InvalidUtf8)
    }

    /// Sub-reader over the next length-delimited payload.
    pub fn message_reader(&mut self) -> Result<Reader<'a>, AminoError> {
        Ok(Reader::new(self.read_bytes()?))
    }

    /// Splits a registered-concrete interface payload into its 4-byte
    /// prefix and the concrete's bare encoding.
    pub fn read_interface(&mut self) -> Result<(u32, &'a [u8]), AminoError> {
        let payload = self.read_bytes()?;
        if payload.len() < 4 {
            return Err(AminoError::ShortInterface);
        }
        let mut prefix = [0u8; 4];
        prefix.copy_from_slice(&payload[..4]);
        Ok((u32::from_be_bytes(prefix), &payload[4..]))
    }

    /// Enforces the expected wire type for a just-read tag.
    pub fn check_wire(field: u32, actual: u8, expected: u8) -> Result<(), AminoError> {
        if actual != expected {
            return Err(AminoError::WireTypeMismatch {
                field,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{bare_uvarint, bare_varint64, Writer};

    #[test]
    fn uvarint_round_trip() {
        for v in [0u64, 1, 127, 128, 300, 10000, u64::from(u32::MAX), u64::MAX] {
            let bytes = bare_uvarint(v);
            let mut r = Reader::new(&bytes);
            assert_eq!(r.read_uvarint().unwrap(), v);
            assert!(r.done());
        }
    }

    #[test]
    fn varint64_round_trip_negative() {
        for v in [-1i64, -10000, i64::MIN, i64::MAX] {
            let bytes = bare_varint64(v);
            let mut r = Reader::new(&bytes);
            assert_eq!(r.read_varint64().unwrap(), v);
        }
    }

    #[test]
    fn overlong_varint_rejected() {
        let bytes = [0xff; 11];
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_uvarint(), Err(AminoError::VarintOverflow));
    }

    #[test]
    fn truncated_bytes_rejected() {
        // claims 5 bytes, provides 2
        let bytes = [0x05, 0xaa, 0xbb];
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_bytes(), Err(AminoError::LengthOutOfBounds(5)));
    }

    #[test]
    fn tag_split() {
        let bytes = [0x82, 0x01];
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_tag().unwrap(), (16, WIRE_BYTES));
    }

    #[test]
    fn zero_field_number_rejected() {
        let bytes = [0x02]; // field 0, wire type 2
        let mut r = Reader::new(&bytes);
        assert_eq!(r.read_tag(), Err(AminoError::ZeroFieldNumber));
    }

    #[test]
    fn interface_round_trip() {
        let mut w = Writer::new();
        let concrete = crate::encode::bare_bytes(&[7u8; 33]);
        w.interface_field(2, 0xeb5ae987, &concrete);
        let bytes = w.into_bytes();

        let mut r = Reader::new(&bytes);
        let (field, wire) = r.read_tag().unwrap();
        assert_eq!((field, wire), (2, WIRE_BYTES));
        let (prefix, bare) = r.read_interface().unwrap();
        assert_eq!(prefix, 0xeb5ae987);
        let mut inner = Reader::new(bare);
        assert_eq!(inner.read_bytes().unwrap(), &[7u8; 33]);
        assert!(r.done());
    }

    #[test]
    fn trailing_bytes_detected() {
        let bytes = [0x00, 0x01];
        let mut r = Reader::new(&bytes);
        r.read_uvarint().unwrap();
        assert_eq!(r.expect_done(), Err(AminoError::TrailingBytes));
    }
}
