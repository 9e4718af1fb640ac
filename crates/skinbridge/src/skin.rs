//! The skin model: a signed, identity-bound texture reference.
//!
//! A skin travels as two strings: a base64 blob whose payload is a
//! JSON "texture claim" issued by the skin authority, and a base64
//! signature over that blob. The claim embeds the profile the texture
//! is bound to — that identity is always *derived* from the blob,
//! never supplied by the caller.
//!
//! The claim looks like this on the wire (base64-decoded):
//!
//! ```json
//! {
//!   "timestamp": 1414987227000,
//!   "profileId": "069a79f444e94726a5befca90e38aaf5",
//!   "profileName": "Notch",
//!   "textures": {
//!     "SKIN": { "url": "http://textures.example/..." },
//!     "CAPE": { "url": "http://textures.example/..." }
//!   }
//! }
//! ```
//!
//! Note the undashed `profileId` spelling — the `uuid` crate parses
//! both that and the hyphenated form, so no custom handling is needed.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Texture claim
// ---------------------------------------------------------------------------

/// The JSON document embedded in the base64 texture blob.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextureClaim {
    /// The profile the texture is bound to.
    profile_id: Uuid,

    /// Name of that profile at issuance time.
    #[serde(default)]
    profile_name: String,

    /// Issuance timestamp in milliseconds. Claims are long-lived;
    /// freshness policy is the skin authority's, not ours.
    #[serde(default)]
    timestamp: i64,

    #[serde(default)]
    textures: TextureUrls,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TextureUrls {
    #[serde(rename = "SKIN")]
    skin: Option<TextureUrl>,

    #[serde(rename = "CAPE")]
    cape: Option<TextureUrl>,
}

#[derive(Debug, Clone, Deserialize)]
struct TextureUrl {
    url: String,
}

// ---------------------------------------------------------------------------
// SkinModel
// ---------------------------------------------------------------------------

/// A validated skin: the original wire strings plus the decoded claim.
///
/// A `SkinModel` can only be built through [`SkinModel::from_encoded`],
/// so holding one means the blob decoded, the claim parsed, and the
/// signature had a plausible shape. It lives for the duration of one
/// message and is handed to the host's apply capability — nothing in
/// this core persists it.
#[derive(Debug, Clone)]
pub struct SkinModel {
    claim: TextureClaim,
    encoded_texture: String,
    signature: String,
}

impl SkinModel {
    /// Builds a skin from its wire representation.
    ///
    /// Validation performed here is structural: the blob must be
    /// standard base64 wrapping a well-formed claim, and the signature
    /// must be non-empty standard base64. The cryptographic check of
    /// the signature against the skin authority's key happens outside
    /// this core — the blob is otherwise opaque to us.
    ///
    /// # Errors
    /// One [`SkinError`] variant per failed stage.
    pub fn from_encoded(
        encoded_texture: &str,
        signature: &str,
    ) -> Result<Self, SkinError> {
        let raw = STANDARD
            .decode(encoded_texture)
            .map_err(SkinError::TextureNotBase64)?;
        let claim: TextureClaim =
            serde_json::from_slice(&raw).map_err(SkinError::MalformedClaim)?;

        if signature.is_empty() {
            return Err(SkinError::SignatureMissing);
        }
        STANDARD
            .decode(signature)
            .map_err(SkinError::SignatureNotBase64)?;

        Ok(Self {
            claim,
            encoded_texture: encoded_texture.to_owned(),
            signature: signature.to_owned(),
        })
    }

    /// The profile identity embedded in the claim — who the skin
    /// visually represents, regardless of who wears it.
    pub fn profile_id(&self) -> Uuid {
        self.claim.profile_id
    }

    /// The profile name at issuance time.
    pub fn profile_name(&self) -> &str {
        &self.claim.profile_name
    }

    /// Claim issuance timestamp in milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.claim.timestamp
    }

    /// URL of the skin texture, when the claim carries one.
    pub fn skin_url(&self) -> Option<&str> {
        self.claim.textures.skin.as_ref().map(|t| t.url.as_str())
    }

    /// URL of the cape texture, when the claim carries one.
    pub fn cape_url(&self) -> Option<&str> {
        self.claim.textures.cape.as_ref().map(|t| t.url.as_str())
    }

    /// The original base64 blob, exactly as received.
    pub fn encoded_texture(&self) -> &str {
        &self.encoded_texture
    }

    /// The original base64 signature, exactly as received.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a skin could not be built from its wire strings.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    /// The texture blob was not valid standard base64.
    #[error("texture blob is not valid base64: {0}")]
    TextureNotBase64(#[source] base64::DecodeError),

    /// The decoded blob was not a well-formed texture claim.
    #[error("texture claim is malformed: {0}")]
    MalformedClaim(#[source] serde_json::Error),

    /// The signature string was empty.
    #[error("signature is missing")]
    SignatureMissing,

    /// The signature was not valid standard base64.
    #[error("signature is not valid base64: {0}")]
    SignatureNotBase64(#[source] base64::DecodeError),
}
