//! Unified error type for the core layer.

use skinbridge_protocol::WireError;

use crate::SkinError;

/// Top-level error returned by the channel handler.
///
/// Wire and skin errors pass through transparently via `#[from]`, so
/// the `?` operator converts them automatically and their messages
/// surface unchanged. Every variant is terminal for the message being
/// processed — nothing in this core retries.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The raw payload was truncated or malformed.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The skin claim could not be validated.
    #[error(transparent)]
    Skin(#[from] SkinError),

    /// The receiver UUID field did not parse as a UUID.
    #[error("receiver uuid {value:?} is not a valid uuid")]
    InvalidReceiverUuid {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_error() {
        let err = WireError::UnexpectedEof {
            wanted: 4,
            remaining: 1,
        };
        let bridge_err: BridgeError = err.into();
        assert!(matches!(bridge_err, BridgeError::Wire(_)));
        assert!(bridge_err.to_string().contains("wanted 4"));
    }

    #[test]
    fn test_from_skin_error() {
        let err = SkinError::SignatureMissing;
        let bridge_err: BridgeError = err.into();
        assert!(matches!(bridge_err, BridgeError::Skin(_)));
    }
}
