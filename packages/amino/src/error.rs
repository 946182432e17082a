use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AminoError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("varint longer than 10 bytes")]
    VarintOverflow,
    #[error("unknown field {field} (wire type {wire_type})")]
    UnknownField { field: u32, wire_type: u8 },
    #[error("field {field}: expected wire type {expected}, got {actual}")]
    WireTypeMismatch { field: u32, expected: u8, actual: u8 },
    #[error("invalid wire type {0}")]
    InvalidWireType(u8),
    #[error("field tag with field number 0")]
    ZeroFieldNumber,
    #[error("length prefix {0} exceeds remaining input")]
    LengthOutOfBounds(u64),
    #[error("trailing bytes after message")]
    TrailingBytes,
    #[error("invalid utf-8 in string field")]
    InvalidUtf8,
    #[error("unknown registered prefix {0:08x}")]
    UnknownPrefix(u32),
    #[error("interface field shorter than its 4-byte prefix")]
    ShortInterface,
    #[error("{0}")]
    Malformed(String),
}

impl AminoError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AminoError::Malformed(msg.into())
    }
}
