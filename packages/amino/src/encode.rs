//! Amino binary encoder.
//!
//! go-amino encodes struct fields proto3-style: `tag = field << 3 | wire`,
//! signed integers as the unsigned varint of their two's-complement bit
//! pattern (NOT zigzag; negative values always take 10 bytes), and it
//! omits zero-valued fields entirely. Re-encoding a decoded message must
//! reproduce the input byte for byte, so every helper here follows the
//! omit-zero rule unless the caller asks otherwise.

use crate::{WIRE_BYTES, WIRE_FIXED64, WIRE_VARINT};

/// Append-only amino writer.
#[derive(Default, Debug, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Writer { buf: Vec::new() }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Raw unsigned LEB128 varint, no field tag.
    pub fn uvarint(&mut self, mut v: u64) {
        loop {
            let b = (v & 0x7f) as u8;
            v >>= 7;
            if v == 0 {
                self.buf.push(b);
                return;
            }
            self.buf.push(b | 0x80);
        }
    }

    fn tag(&mut self, field: u32, wire_type: u8) {
        self.uvarint(u64::from(field) << 3 | u64::from(wire_type));
    }

    /// Varint field, omitted when zero.
    pub fn uvarint_field(&mut self, field: u32, v: u64) {
        if v == 0 {
            return;
        }
        self.tag(field, WIRE_VARINT);
        self.uvarint(v);
    }

    /// Signed varint field (two's complement), omitted when zero.
    pub fn varint64_field(&mut self, field: u32, v: i64) {
        self.uvarint_field(field, v as u64);
    }

    /// Little-endian fixed64 field, omitted when zero.
    pub fn fixed64_field(&mut self, field: u32, v: u64) {
        if v == 0 {
            return;
        }
        self.tag(field, WIRE_FIXED64);
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Length-delimited bytes field, omitted when empty.
    pub fn bytes_field(&mut self, field: u32, v: &[u8]) {
        if v.is_empty() {
            return;
        }
        self.tag(field, WIRE_BYTES);
        self.uvarint(v.len() as u64);
        self.buf.extend_from_slice(v);
    }

    pub fn string_field(&mut self, field: u32, v: &str) {
        self.bytes_field(field, v.as_bytes());
    }

    /// Embedded struct field, omitted when the encoded struct is empty
    /// (a zero-valued struct and an absent one are indistinguishable).
    pub fn struct_field(&mut self, field: u32, inner: &[u8]) {
        if inner.is_empty() {
            return;
        }
        self.struct_field_always(field, inner);
    }

    /// Embedded struct field that is written even when empty. Repeated
    /// elements need this: a nil element still occupies its slot on the
    /// wire as `tag ++ 0x00`.
    pub fn struct_field_always(&mut self, field: u32, inner: &[u8]) {
        self.tag(field, WIRE_BYTES);
        self.uvarint(inner.len() as u64);
        self.buf.extend_from_slice(inner);
    }

    /// Registered-concrete interface field: length covers the 4-byte
    /// prefix plus the concrete's bare encoding.
    pub fn interface_field(&mut self, field: u32, prefix: u32, concrete: &[u8]) {
        self.tag(field, WIRE_BYTES);
        self.uvarint(4 + concrete.len() as u64);
        self.buf.extend_from_slice(&prefix.to_be_bytes());
        self.buf.extend_from_slice(concrete);
    }
}

/// Bare (unframed) byte-slice encoding: uvarint length then the bytes.
/// This is what `MarshalBinaryBare` produces for a standalone `[]byte`.
pub fn bare_bytes(v: &[u8]) -> Vec<u8> {
    let mut w = Writer::new();
    w.uvarint(v.len() as u64);
    let mut out = w.into_bytes();
    out.extend_from_slice(v);
    out
}

/// Bare varint encoding of an unsigned integer.
pub fn bare_uvarint(v: u64) -> Vec<u8> {
    let mut w = Writer::new();
    w.uvarint(v);
    w.into_bytes()
}

/// Bare varint encoding of a signed integer (two's complement).
pub fn bare_varint64(v: i64) -> Vec<u8> {
    bare_uvarint(v as u64)
}

/// Length-prefix a message the way `MarshalBinaryLengthPrefixed` does.
pub fn length_prefixed(msg: &[u8]) -> Vec<u8> {
    bare_bytes(msg)
}
