//! Wire protocol for the skinbridge sub-channel.
//!
//! This crate defines the "language" spoken over the shared
//! plugin-messaging channel between a proxy and its backend servers:
//!
//! - **Wire primitives** ([`WireReader`], [`WireWriter`]) — a
//!   cursor-based reader over received bytes and an append-only
//!   writer for outbound payloads.
//! - **Messages** ([`SkinMessage`], [`SkinUpdate`], [`PermissionCheck`],
//!   [`PermissionResponse`]) — the sub-channel message types and
//!   their exact field order.
//! - **Errors** ([`WireError`]) — what can go wrong at the byte level.
//!
//! # Architecture
//!
//! The wire layer knows nothing about players, permissions, or skins
//! as semantic objects — it only maps bytes to and from message
//! structures. The `skinbridge` core crate layers the decision logic
//! on top.
//!
//! ```text
//! Host channel (bytes) → Protocol (SkinMessage) → Core (decision + reply)
//! ```

mod error;
mod message;
mod wire;

pub use error::WireError;
pub use message::{
    PermissionCheck, PermissionResponse, SkinMessage, SkinUpdate,
    TAG_PERMISSIONS_CHECK, TAG_PERMISSIONS_FAILURE, TAG_PERMISSIONS_SUCCESS,
    TAG_UPDATE_SKIN,
};
pub use wire::{WireReader, WireWriter};
