//! The sub-channel message types and their wire codecs.
//!
//! One physical plugin-messaging channel carries several logical
//! message kinds, multiplexed by a leading length-prefixed string tag
//! (the "sub-channel"). Two tags arrive at a backend server:
//!
//! - `"UpdateSkin"` — an authoritative instant skin update, already
//!   verified upstream.
//! - `"PermissionsCheck"` — a request to authorize a skin change,
//!   answered with `"PermissionsSuccess"` or `"PermissionsFailure"`.
//!
//! Tag matching is case-insensitive; any other tag decodes to
//! [`SkinMessage::Unknown`] and is ignored by callers — the
//! sub-protocol defines no other inbound tags.

use crate::{WireError, WireReader, WireWriter};

/// Sub-channel tag for instant skin updates.
pub const TAG_UPDATE_SKIN: &str = "UpdateSkin";
/// Sub-channel tag for permission-check requests.
pub const TAG_PERMISSIONS_CHECK: &str = "PermissionsCheck";
/// Sub-channel tag for a granted permission check (outbound only).
pub const TAG_PERMISSIONS_SUCCESS: &str = "PermissionsSuccess";
/// Sub-channel tag for a denied permission check (outbound only).
pub const TAG_PERMISSIONS_FAILURE: &str = "PermissionsFailure";

// ---------------------------------------------------------------------------
// Inbound messages
// ---------------------------------------------------------------------------

/// A decoded inbound payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinMessage {
    /// An `"UpdateSkin"` message.
    UpdateSkin(SkinUpdate),

    /// A `"PermissionsCheck"` request.
    PermissionsCheck(PermissionCheck),

    /// Any other sub-channel tag. Not an error — the payload simply
    /// belongs to a different sub-protocol on the shared channel.
    Unknown,
}

impl SkinMessage {
    /// Decodes a raw payload: leading tag, then the matching body.
    ///
    /// For [`SkinMessage::Unknown`] the body is left untouched.
    ///
    /// # Errors
    /// Returns a [`WireError`] if the tag or a body field is truncated
    /// or malformed. A decode error never yields a partial message.
    pub fn decode(payload: &[u8]) -> Result<Self, WireError> {
        let mut reader = WireReader::new(payload);
        let tag = reader.read_string()?;

        if tag.eq_ignore_ascii_case(TAG_UPDATE_SKIN) {
            Ok(Self::UpdateSkin(SkinUpdate::decode(&mut reader)?))
        } else if tag.eq_ignore_ascii_case(TAG_PERMISSIONS_CHECK) {
            Ok(Self::PermissionsCheck(PermissionCheck::decode(&mut reader)?))
        } else {
            Ok(Self::Unknown)
        }
    }
}

/// Body of an `"UpdateSkin"` message.
///
/// The first field is the encoded texture string. The literal `"null"`
/// (case-insensitive) means "clear the sender's skin" and ends the
/// message — no further fields exist on the wire in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinUpdate {
    /// Clear the sender's skin.
    Clear,

    /// Apply a skin to the named player.
    Set {
        /// Base64 texture blob, signed by the skin authority.
        encoded_texture: String,
        /// Base64 signature over the blob.
        signature: String,
        /// Exact name of the player who receives the skin.
        player_name: String,
    },
}

impl SkinUpdate {
    fn decode(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        let encoded_texture = reader.read_string()?;
        if encoded_texture.eq_ignore_ascii_case("null") {
            return Ok(Self::Clear);
        }

        let signature = reader.read_string()?;
        let player_name = reader.read_string()?;
        Ok(Self::Set {
            encoded_texture,
            signature,
            player_name,
        })
    }

    /// Encodes this update as a full payload, tag included.
    ///
    /// Used by the proxy side of the channel; provided here so both
    /// directions share one codec.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut writer = WireWriter::new();
        writer.write_string(TAG_UPDATE_SKIN)?;
        match self {
            Self::Clear => writer.write_string("null")?,
            Self::Set {
                encoded_texture,
                signature,
                player_name,
            } => {
                writer.write_string(encoded_texture)?;
                writer.write_string(signature)?;
                writer.write_string(player_name)?;
            }
        }
        Ok(writer.into_bytes())
    }
}

/// Body of a `"PermissionsCheck"` request.
///
/// `receiver_uuid` stays a raw string: a granted check re-echoes the
/// caller's fields byte-for-byte, so the wire type never re-derives
/// them. The core layer parses the UUID separately when it needs the
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Correlation token chosen by the caller, echoed in the response.
    pub request_id: i32,
    /// Base64 texture blob of the claimed skin.
    pub encoded_texture: String,
    /// Base64 signature over the blob.
    pub signature: String,
    /// UUID string of the player who would wear the skin.
    pub receiver_uuid: String,
    /// Whether the skin is additionally gated by an allow-list.
    pub requires_whitelist: bool,
    /// Caller-asserted bypass flag; skips the permission evaluation.
    pub privileged: bool,
}

impl PermissionCheck {
    fn decode(reader: &mut WireReader<'_>) -> Result<Self, WireError> {
        Ok(Self {
            request_id: reader.read_i32()?,
            encoded_texture: reader.read_string()?,
            signature: reader.read_string()?,
            receiver_uuid: reader.read_string()?,
            requires_whitelist: reader.read_bool()?,
            privileged: reader.read_bool()?,
        })
    }

    /// Encodes this request as a full payload, tag included.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut writer = WireWriter::new();
        writer.write_string(TAG_PERMISSIONS_CHECK)?;
        writer.write_i32(self.request_id);
        writer.write_string(&self.encoded_texture)?;
        writer.write_string(&self.signature)?;
        writer.write_string(&self.receiver_uuid)?;
        writer.write_bool(self.requires_whitelist);
        writer.write_bool(self.privileged);
        Ok(writer.into_bytes())
    }
}

// ---------------------------------------------------------------------------
// Outbound response
// ---------------------------------------------------------------------------

/// The reply to a `"PermissionsCheck"` request.
///
/// Exactly one response is sent per request. A grant carries the
/// request's own fields back verbatim; a denial carries nothing —
/// the caller learns only that the change was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionResponse {
    /// The skin change is authorized.
    Success {
        /// The request's correlation token.
        request_id: i32,
        /// The request's texture blob, unmodified.
        encoded_texture: String,
        /// The request's signature, unmodified.
        signature: String,
        /// The request's receiver UUID string, unmodified.
        receiver_uuid: String,
    },

    /// The skin change is refused. No detail is carried.
    Failure,
}

impl PermissionResponse {
    /// Builds a success response echoing the request's fields.
    pub fn granted(check: &PermissionCheck) -> Self {
        Self::Success {
            request_id: check.request_id,
            encoded_texture: check.encoded_texture.clone(),
            signature: check.signature.clone(),
            receiver_uuid: check.receiver_uuid.clone(),
        }
    }

    /// Encodes this response as a full payload, tag included.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut writer = WireWriter::new();
        match self {
            Self::Success {
                request_id,
                encoded_texture,
                signature,
                receiver_uuid,
            } => {
                writer.write_string(TAG_PERMISSIONS_SUCCESS)?;
                writer.write_i32(*request_id);
                writer.write_string(encoded_texture)?;
                writer.write_string(signature)?;
                writer.write_string(receiver_uuid)?;
            }
            Self::Failure => {
                writer.write_string(TAG_PERMISSIONS_FAILURE)?;
            }
        }
        Ok(writer.into_bytes())
    }

    /// Decodes a response payload.
    ///
    /// The proxy side uses this; tests use it to verify the round-trip.
    /// Returns `Ok(None)` when the tag is neither response tag — some
    /// other sub-protocol's traffic on the shared channel.
    ///
    /// # Errors
    /// [`WireError`] if the tag or a body field is truncated.
    pub fn decode(payload: &[u8]) -> Result<Option<Self>, WireError> {
        let mut reader = WireReader::new(payload);
        let tag = reader.read_string()?;

        if tag.eq_ignore_ascii_case(TAG_PERMISSIONS_SUCCESS) {
            Ok(Some(Self::Success {
                request_id: reader.read_i32()?,
                encoded_texture: reader.read_string()?,
                signature: reader.read_string()?,
                receiver_uuid: reader.read_string()?,
            }))
        } else if tag.eq_ignore_ascii_case(TAG_PERMISSIONS_FAILURE) {
            Ok(Some(Self::Failure))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_update_payload() -> Vec<u8> {
        SkinUpdate::Set {
            encoded_texture: "abc123".into(),
            signature: "sig1".into(),
            player_name: "Notch".into(),
        }
        .encode()
        .unwrap()
    }

    // =====================================================================
    // Tag dispatch
    // =====================================================================

    #[test]
    fn test_decode_update_skin_tag() {
        let msg = SkinMessage::decode(&set_update_payload()).unwrap();
        assert!(matches!(msg, SkinMessage::UpdateSkin(SkinUpdate::Set { .. })));
    }

    #[test]
    fn test_decode_tag_is_case_insensitive() {
        let mut writer = WireWriter::new();
        writer.write_string("uPdAtEsKiN").unwrap();
        writer.write_string("null").unwrap();
        let msg = SkinMessage::decode(&writer.into_bytes()).unwrap();
        assert_eq!(msg, SkinMessage::UpdateSkin(SkinUpdate::Clear));
    }

    #[test]
    fn test_decode_unknown_tag_yields_unknown() {
        let mut writer = WireWriter::new();
        writer.write_string("Forward").unwrap();
        // Arbitrary trailing bytes; an unknown body is never inspected.
        let mut bytes = writer.into_bytes();
        bytes.extend_from_slice(&[1, 2, 3]);

        let msg = SkinMessage::decode(&bytes).unwrap();
        assert_eq!(msg, SkinMessage::Unknown);
    }

    #[test]
    fn test_decode_empty_payload_fails() {
        assert!(SkinMessage::decode(&[]).is_err());
    }

    // =====================================================================
    // SkinUpdate
    // =====================================================================

    #[test]
    fn test_update_null_texture_decodes_as_clear() {
        let payload = SkinUpdate::Clear.encode().unwrap();
        let msg = SkinMessage::decode(&payload).unwrap();
        assert_eq!(msg, SkinMessage::UpdateSkin(SkinUpdate::Clear));
    }

    #[test]
    fn test_update_null_is_case_insensitive() {
        let mut writer = WireWriter::new();
        writer.write_string(TAG_UPDATE_SKIN).unwrap();
        writer.write_string("NULL").unwrap();
        let msg = SkinMessage::decode(&writer.into_bytes()).unwrap();
        assert_eq!(msg, SkinMessage::UpdateSkin(SkinUpdate::Clear));
    }

    #[test]
    fn test_clear_reads_no_bytes_past_texture_field() {
        // Garbage after "null" must not be touched.
        let mut payload = SkinUpdate::Clear.encode().unwrap();
        payload.extend_from_slice(&[0xde, 0xad]);
        let msg = SkinMessage::decode(&payload).unwrap();
        assert_eq!(msg, SkinMessage::UpdateSkin(SkinUpdate::Clear));
    }

    #[test]
    fn test_update_set_field_order() {
        let msg = SkinMessage::decode(&set_update_payload()).unwrap();
        let SkinMessage::UpdateSkin(SkinUpdate::Set {
            encoded_texture,
            signature,
            player_name,
        }) = msg
        else {
            panic!("expected Set update");
        };
        assert_eq!(encoded_texture, "abc123");
        assert_eq!(signature, "sig1");
        assert_eq!(player_name, "Notch");
    }

    #[test]
    fn test_update_truncated_after_texture_fails() {
        let mut writer = WireWriter::new();
        writer.write_string(TAG_UPDATE_SKIN).unwrap();
        writer.write_string("abc123").unwrap();
        // Signature and player name missing.
        assert!(SkinMessage::decode(&writer.into_bytes()).is_err());
    }

    // =====================================================================
    // PermissionCheck
    // =====================================================================

    fn sample_check() -> PermissionCheck {
        PermissionCheck {
            request_id: 7,
            encoded_texture: "abc123".into(),
            signature: "sig1".into(),
            receiver_uuid: "069a79f4-44e9-4726-a5be-fca90e38aaf5".into(),
            requires_whitelist: false,
            privileged: false,
        }
    }

    #[test]
    fn test_permission_check_round_trip() {
        let check = sample_check();
        let payload = check.encode().unwrap();
        let msg = SkinMessage::decode(&payload).unwrap();
        assert_eq!(msg, SkinMessage::PermissionsCheck(check));
    }

    #[test]
    fn test_permission_check_flags_round_trip() {
        let check = PermissionCheck {
            requires_whitelist: true,
            privileged: true,
            ..sample_check()
        };
        let payload = check.encode().unwrap();
        let msg = SkinMessage::decode(&payload).unwrap();
        assert_eq!(msg, SkinMessage::PermissionsCheck(check));
    }

    #[test]
    fn test_permission_check_truncated_fails() {
        let payload = sample_check().encode().unwrap();
        // Drop the trailing boolean.
        assert!(SkinMessage::decode(&payload[..payload.len() - 1]).is_err());
    }

    #[test]
    fn test_permission_check_keeps_uuid_string_verbatim() {
        // Upper-case, non-canonical spelling must survive untouched.
        let check = PermissionCheck {
            receiver_uuid: "069A79F444E94726A5BEFCA90E38AAF5".into(),
            ..sample_check()
        };
        let payload = check.encode().unwrap();
        let SkinMessage::PermissionsCheck(decoded) =
            SkinMessage::decode(&payload).unwrap()
        else {
            panic!("expected PermissionsCheck");
        };
        assert_eq!(decoded.receiver_uuid, "069A79F444E94726A5BEFCA90E38AAF5");
    }

    // =====================================================================
    // PermissionResponse
    // =====================================================================

    #[test]
    fn test_success_response_round_trip() {
        let response = PermissionResponse::granted(&sample_check());
        let payload = response.encode().unwrap();
        let decoded = PermissionResponse::decode(&payload).unwrap();
        assert_eq!(decoded, Some(response));
    }

    #[test]
    fn test_granted_echoes_request_fields() {
        let check = sample_check();
        let PermissionResponse::Success {
            request_id,
            encoded_texture,
            signature,
            receiver_uuid,
        } = PermissionResponse::granted(&check)
        else {
            panic!("expected Success");
        };
        assert_eq!(request_id, 7);
        assert_eq!(encoded_texture, check.encoded_texture);
        assert_eq!(signature, check.signature);
        assert_eq!(receiver_uuid, check.receiver_uuid);
    }

    #[test]
    fn test_failure_response_is_bare_tag() {
        let payload = PermissionResponse::Failure.encode().unwrap();

        let mut reader = WireReader::new(&payload);
        assert_eq!(reader.read_string().unwrap(), TAG_PERMISSIONS_FAILURE);
        assert_eq!(reader.remaining(), 0);

        let decoded = PermissionResponse::decode(&payload).unwrap();
        assert_eq!(decoded, Some(PermissionResponse::Failure));
    }

    #[test]
    fn test_response_decode_unknown_tag_yields_none() {
        let mut writer = WireWriter::new();
        writer.write_string("SomethingElse").unwrap();
        let decoded = PermissionResponse::decode(&writer.into_bytes()).unwrap();
        assert_eq!(decoded, None);
    }
}
