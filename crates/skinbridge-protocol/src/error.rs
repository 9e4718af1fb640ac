//! Error types for the wire layer.
//!
//! Each crate in skinbridge defines its own error enum. A `WireError`
//! always means the raw bytes were wrong — truncated, not valid UTF-8,
//! or too large to frame — never that a message was semantically
//! invalid. Semantic problems live in the core crate's errors.

/// Errors that can occur while reading or writing the wire format.
///
/// `#[derive(thiserror::Error)]` auto-generates the `std::error::Error`
/// implementation; the `#[error("...")]` attributes define the message
/// you see when the error reaches a log line.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload ended before the field being read was complete.
    ///
    /// `wanted` is how many bytes the read needed; `remaining` is how
    /// many were actually left. Common cause: a truncated plugin
    /// message, or a string whose length prefix exceeds the payload.
    #[error("unexpected end of payload: wanted {wanted} bytes, {remaining} remaining")]
    UnexpectedEof { wanted: usize, remaining: usize },

    /// A length-prefixed string field was not valid UTF-8.
    #[error("string field is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A string was too long to encode behind a u16 length prefix.
    #[error("string of {len} bytes exceeds the u16 length prefix")]
    StringTooLong { len: usize },
}
