//! Stream primitives
//!
//! Byte-exact encodings shared with deployed peers:
//!
//! | Primitive       | Encoding                                                   |
//! |-----------------|------------------------------------------------------------|
//! | byte            | 1 byte                                                     |
//! | boolean         | 1 byte, `1` or `0`                                         |
//! | vint            | 7-bit groups, low first, high bit continues, max 5 bytes   |
//! | zlong           | zig-zag, then 7-bit groups, max 10 bytes                   |
//! | long            | 8 bytes big-endian                                         |
//! | string          | vint UTF-16 unit count, then each unit as 1, 2 or 3 bytes  |
//! | optional string | boolean presence flag, then string                         |
//! | bytes reference | vint length, then raw bytes                                |
//!
//! Strings count UTF-16 code units, and each unit (surrogates included) is
//! encoded on its own, so a non-BMP character takes six bytes.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::config::WireConfig;
use crate::error::{Result, StreamError};

const VINT_MAX_BYTES: usize = 5;
const ZLONG_MAX_BYTES: usize = 10;

/// Convert a length to the non-negative `i32` range of a vint prefix
fn vint_len(kind: &'static str, len: usize) -> Result<u32> {
    if len > i32::MAX as usize {
        return Err(StreamError::LengthOverflow { kind, len });
    }
    Ok(len as u32)
}

// =============================================================================
// Output
// =============================================================================

/// Writes primitives to any [`Write`]
pub struct StreamOutput<W: Write> {
    inner: W,
}

impl<W: Write> StreamOutput<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Write a single byte
    pub fn write_byte(&mut self, b: u8) -> Result<()> {
        self.inner.write_u8(b)?;
        Ok(())
    }

    /// Write a boolean as `1` or `0`
    pub fn write_bool(&mut self, v: bool) -> Result<()> {
        self.write_byte(v as u8)
    }

    /// Write an int as a vint; negative values take the full five bytes
    pub fn write_vint(&mut self, v: i32) -> Result<()> {
        self.write_var(v as u32 as u64)
    }

    /// Write a signed long zig-zag encoded
    pub fn write_zlong(&mut self, v: i64) -> Result<()> {
        self.write_var(((v << 1) ^ (v >> 63)) as u64)
    }

    /// Write a long as 8 big-endian bytes
    pub fn write_long(&mut self, v: i64) -> Result<()> {
        self.inner.write_i64::<BigEndian>(v)?;
        Ok(())
    }

    /// Write a string
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        let units = s.encode_utf16().count();
        let count = vint_len("string", units)?;
        self.write_var(count as u64)?;

        let mut buf = Vec::with_capacity(s.len() + units);
        for unit in s.encode_utf16() {
            match unit {
                0x0000..=0x007F => buf.push(unit as u8),
                0x0080..=0x07FF => {
                    buf.push(0xC0 | (unit >> 6) as u8);
                    buf.push(0x80 | (unit & 0x3F) as u8);
                }
                _ => {
                    buf.push(0xE0 | (unit >> 12) as u8);
                    buf.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                    buf.push(0x80 | (unit & 0x3F) as u8);
                }
            }
        }
        self.inner.write_all(&buf)?;
        Ok(())
    }

    /// Write a presence flag, then the string if present
    pub fn write_optional_string(&mut self, s: Option<&str>) -> Result<()> {
        match s {
            Some(s) => {
                self.write_bool(true)?;
                self.write_string(s)
            }
            None => self.write_bool(false),
        }
    }

    /// Write a length-prefixed opaque block; absent writes a zero length
    pub fn write_bytes_reference(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        let bytes = bytes.unwrap_or_default();
        let len = vint_len("bytes", bytes.len())?;
        self.write_var(len as u64)?;
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn write_var(&mut self, mut v: u64) -> Result<()> {
        while v & !0x7F != 0 {
            self.write_byte((v & 0x7F) as u8 | 0x80)?;
            v >>= 7;
        }
        self.write_byte(v as u8)
    }
}

// =============================================================================
// Input
// =============================================================================

/// Reads primitives from any [`Read`], enforcing [`WireConfig`] limits
pub struct StreamInput<R: Read> {
    inner: R,
    config: WireConfig,
}

impl<R: Read> StreamInput<R> {
    /// Wrap a reader with default limits
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, WireConfig::default())
    }

    /// Wrap a reader with explicit limits
    pub fn with_config(inner: R, config: WireConfig) -> Self {
        Self { inner, config }
    }

    /// Limits in effect
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Unwrap the underlying reader
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read a single byte
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.inner.read_u8()?)
    }

    /// Read a boolean; only `0` and `1` are accepted
    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(StreamError::InvalidBoolean(b)),
        }
    }

    /// Read a vint
    pub fn read_vint(&mut self) -> Result<i32> {
        Ok(self.read_var(VINT_MAX_BYTES)? as u32 as i32)
    }

    /// Read a zig-zag encoded long
    pub fn read_zlong(&mut self) -> Result<i64> {
        let v = self.read_var(ZLONG_MAX_BYTES)?;
        Ok((v >> 1) as i64 ^ -((v & 1) as i64))
    }

    /// Read an 8-byte big-endian long
    pub fn read_long(&mut self) -> Result<i64> {
        Ok(self.inner.read_i64::<BigEndian>()?)
    }

    /// Read a string
    pub fn read_string(&mut self) -> Result<String> {
        let count = self.read_len("string", self.config.max_string_units)?;
        let mut units = Vec::with_capacity(count);
        for _ in 0..count {
            let b = self.read_byte()? as u16;
            let unit = match b >> 4 {
                0..=7 => b,
                12 | 13 => {
                    let b2 = self.read_continuation()?;
                    ((b & 0x1F) << 6) | b2
                }
                14 => {
                    let b2 = self.read_continuation()?;
                    let b3 = self.read_continuation()?;
                    ((b & 0x0F) << 12) | (b2 << 6) | b3
                }
                _ => return Err(StreamError::InvalidString),
            };
            units.push(unit);
        }
        String::from_utf16(&units).map_err(|_| StreamError::InvalidString)
    }

    /// Read a presence flag, then the string if present
    pub fn read_optional_string(&mut self) -> Result<Option<String>> {
        if self.read_bool()? {
            Ok(Some(self.read_string()?))
        } else {
            Ok(None)
        }
    }

    /// Read a length-prefixed opaque block
    pub fn read_bytes_reference(&mut self) -> Result<Vec<u8>> {
        let len = self.read_len("bytes", self.config.max_bytes_len)?;
        let mut bytes = vec![0u8; len];
        self.inner.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    fn read_len(&mut self, kind: &'static str, limit: usize) -> Result<usize> {
        let len = self.read_vint()?;
        if len < 0 {
            return Err(StreamError::NegativeLength { kind, len });
        }
        let len = len as usize;
        if len > limit {
            return Err(StreamError::LengthLimitExceeded { kind, len, limit });
        }
        Ok(len)
    }

    fn read_continuation(&mut self) -> Result<u16> {
        let b = self.read_byte()?;
        if b & 0xC0 != 0x80 {
            return Err(StreamError::InvalidString);
        }
        Ok((b & 0x3F) as u16)
    }

    fn read_var(&mut self, max_bytes: usize) -> Result<u64> {
        let mut value = 0u64;
        for i in 0..max_bytes {
            let b = self.read_byte()?;
            value |= ((b & 0x7F) as u64).wrapping_shl(7 * i as u32);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(StreamError::VarIntTooLong)
    }
}
