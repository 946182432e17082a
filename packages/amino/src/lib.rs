//! Minimal go-amino binary wire subset.
//!
//! Only the pieces the Tendermint v0.32 consensus encodings use are
//! implemented: unsigned varints, two's-complement signed varints,
//! length-delimited fields, fixed64 fields, and registered-concrete
//! interface fields (4-byte prefix). There is no codec registry; callers
//! drive the writer/reader explicitly, field by field.

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::Reader;
pub use encode::Writer;
pub use error::AminoError;

/// Proto-compatible wire type for varint-encoded fields.
pub const WIRE_VARINT: u8 = 0;
/// Proto-compatible wire type for 8-byte little-endian fields.
pub const WIRE_FIXED64: u8 = 1;
/// Proto-compatible wire type for length-delimited fields.
pub const WIRE_BYTES: u8 = 2;
