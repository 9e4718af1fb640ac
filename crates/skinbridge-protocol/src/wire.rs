//! Cursor-based reader and writer for the wire format.
//!
//! The sub-protocol uses a tiny fixed encoding: big-endian integers,
//! single-byte booleans, and UTF-8 strings behind a big-endian u16
//! length prefix. There is no outer framing — the host's messaging
//! channel delivers one complete payload per message.
//!
//! [`WireReader`] is an immutable cursor: it borrows the payload and
//! advances an offset, and every read either yields a value or fails
//! with a typed [`WireError`]. [`WireWriter`] is the append-only
//! counterpart, producing a final owned byte vector via
//! [`WireWriter::into_bytes`]. Neither side ever exposes a partially
//! written or partially consumed buffer.

use crate::WireError;

// ---------------------------------------------------------------------------
// WireReader
// ---------------------------------------------------------------------------

/// An immutable cursor over a received payload.
///
/// Reads advance the cursor; a failed read leaves the cursor where the
/// failure occurred, which is fine because decoding is all-or-nothing —
/// callers abandon the reader on the first error.
///
/// ## Example
///
/// ```rust
/// use skinbridge_protocol::WireReader;
///
/// // 0x00 0x02 is the length prefix, "hi" the string bytes.
/// let payload = [0x00, 0x02, b'h', b'i', 0x01];
/// let mut reader = WireReader::new(&payload);
///
/// assert_eq!(reader.read_string().unwrap(), "hi");
/// assert!(reader.read_bool().unwrap());
/// assert_eq!(reader.remaining(), 0);
/// ```
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> WireReader<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Takes the next `count` bytes, advancing the cursor.
    ///
    /// # Errors
    /// Returns [`WireError::UnexpectedEof`] if fewer than `count`
    /// bytes remain.
    fn take(&mut self, count: usize) -> Result<&'a [u8], WireError> {
        if self.remaining() < count {
            return Err(WireError::UnexpectedEof {
                wanted: count,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(slice)
    }

    /// Reads a big-endian u16.
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Reads a big-endian i32.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a single-byte boolean. Any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool, WireError> {
        Ok(self.take(1)?[0] != 0)
    }

    /// Reads a length-prefixed UTF-8 string.
    ///
    /// # Errors
    /// [`WireError::UnexpectedEof`] if the prefix or the string body
    /// runs past the payload; [`WireError::InvalidUtf8`] if the body
    /// is not valid UTF-8.
    pub fn read_string(&mut self) -> Result<String, WireError> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }
}

// ---------------------------------------------------------------------------
// WireWriter
// ---------------------------------------------------------------------------

/// An append-only builder for an outbound payload.
///
/// Writes never fail except [`WireWriter::write_string`] on a string
/// that does not fit behind the u16 prefix. The finished payload is an
/// immutable `Vec<u8>` — the writer is consumed, so a sent buffer can
/// never be appended to afterwards.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a big-endian i32.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Appends a boolean as a single byte (1 or 0).
    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    /// Appends a length-prefixed UTF-8 string.
    ///
    /// # Errors
    /// Returns [`WireError::StringTooLong`] if the string's UTF-8
    /// byte length exceeds `u16::MAX`.
    pub fn write_string(&mut self, value: &str) -> Result<(), WireError> {
        let len = value.len();
        let prefix =
            u16::try_from(len).map_err(|_| WireError::StringTooLong { len })?;
        self.buf.extend_from_slice(&prefix.to_be_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Consumes the writer and returns the finished payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
