//! Codec traits and helpers
//!
//! A type that travels between nodes implements [`Writeable`] and
//! [`Readable`]. Composite types delegate to their parts in a fixed order;
//! nothing is self-describing, so the read order must mirror the write order
//! exactly.

use std::io::{Read, Write};

use crate::config::WireConfig;
use crate::error::Result;
use crate::stream::{StreamInput, StreamOutput};

/// Encodes itself onto a stream
pub trait Writeable {
    /// Write all fields in wire order
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()>;
}

/// Decodes itself from a stream
pub trait Readable: Sized {
    /// Read all fields in wire order
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self>;
}

/// Encode a value into a fresh buffer
pub fn encode_to_vec<T: Writeable + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = StreamOutput::new(Vec::new());
    value.write_to(&mut out)?;
    Ok(out.into_inner())
}

/// Decode a value from a byte slice with default limits
///
/// Trailing bytes are left unread; framing belongs to the transport.
pub fn decode_from_slice<T: Readable>(bytes: &[u8]) -> Result<T> {
    decode_from_slice_with(bytes, WireConfig::default())
}

/// Decode a value from a byte slice with explicit limits
pub fn decode_from_slice_with<T: Readable>(bytes: &[u8], config: WireConfig) -> Result<T> {
    let mut input = StreamInput::with_config(bytes, config);
    T::read_from(&mut input)
}
